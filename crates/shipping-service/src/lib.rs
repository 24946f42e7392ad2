//! # Shipping Service Library
//!
//! Order items ("shipping lines") kept consistent with the order and product services.
//!
//! This library exposes the core modules of the application for integration testing.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_item_actor;
pub mod service;
pub mod web;
