//! # HTTP Gateway
//!
//! [`RemoteGateway`] over HTTP, using a blocking `ureq` agent.
//!
//! Each call runs on Tokio's blocking pool so the request stays one synchronous round trip
//! without stalling the runtime. Status mapping:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx with a decodable body | `Ok(entity)` |
//! | 404 | [`GatewayError::NotFound`] |
//! | any other status, I/O failure, undecodable body | [`GatewayError::Transport`] |
use super::gateway::{GatewayError, RemoteGateway};
use crate::model::{OrderId, ProductId, RemoteOrder, RemoteProduct};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

#[derive(Clone)]
pub struct HttpGateway {
    agent: ureq::Agent,
    orders_url: String,
    products_url: String,
}

impl HttpGateway {
    /// `orders_url` and `products_url` are collection URLs, e.g.
    /// `http://127.0.0.1:8300/order-service/api/orders`. A trailing slash is ignored.
    pub fn new(orders_url: impl Into<String>, products_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            orders_url: trim_slash(orders_url.into()),
            products_url: trim_slash(products_url.into()),
        }
    }

    pub fn order_url(&self, id: OrderId) -> String {
        format!("{}/{}", self.orders_url, id)
    }

    pub fn order_status_url(&self, id: OrderId) -> String {
        format!("{}/{}/status", self.orders_url, id)
    }

    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.products_url, id)
    }

    async fn blocking<T, F>(&self, call: F) -> Result<T, GatewayError>
    where
        T: Send + 'static,
        F: FnOnce(ureq::Agent) -> Result<T, GatewayError> + Send + 'static,
    {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || call(agent))
            .await
            .map_err(|e| GatewayError::Transport(format!("gateway task failed: {e}")))?
    }
}

fn trim_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

fn classify(err: ureq::Error, not_found: GatewayError, url: &str) -> GatewayError {
    match err {
        ureq::Error::Status(404, _) => not_found,
        ureq::Error::Status(code, _) => GatewayError::Transport(format!("http status {code} from {url}")),
        ureq::Error::Transport(err) => GatewayError::Transport(format!("{url}: {err}")),
    }
}

fn get_json<T: DeserializeOwned>(
    agent: &ureq::Agent,
    url: &str,
    not_found: GatewayError,
) -> Result<T, GatewayError> {
    let response = agent
        .get(url)
        .call()
        .map_err(|e| classify(e, not_found, url))?;
    response
        .into_json::<T>()
        .map_err(|e| GatewayError::Transport(format!("malformed response from {url}: {e}")))
}

#[async_trait]
impl RemoteGateway for HttpGateway {
    #[instrument(skip(self))]
    async fn fetch_order(&self, id: OrderId) -> Result<RemoteOrder, GatewayError> {
        let url = self.order_url(id);
        debug!(%url, "GET order");
        self.blocking(move |agent| get_json(&agent, &url, GatewayError::order_not_found(id)))
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, id: ProductId) -> Result<RemoteProduct, GatewayError> {
        let url = self.product_url(id);
        debug!(%url, "GET product");
        self.blocking(move |agent| get_json(&agent, &url, GatewayError::product_not_found(id)))
            .await
    }

    #[instrument(skip(self))]
    async fn advance_order_status(&self, id: OrderId) -> Result<(), GatewayError> {
        let url = self.order_status_url(id);
        debug!(%url, "PATCH order status");
        let result = self
            .blocking(move |agent| {
                agent
                    .request("PATCH", &url)
                    .call()
                    .map(|_| ())
                    .map_err(|e| classify(e, GatewayError::order_not_found(id), &url))
            })
            .await;
        if let Err(e) = &result {
            warn!(error = %e, "Status advance failed");
        }
        result
    }
}
