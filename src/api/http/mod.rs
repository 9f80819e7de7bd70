use async_trait::async_trait;
use reqwest::Response;

pub use group::GroupHttp;

use crate::error::{Error, GatewayError, Result};

mod group;

#[async_trait]
pub trait RespStatus: Sized {
    async fn success(self) -> Result<Self>;
}

#[async_trait]
impl RespStatus for Response {
    async fn success(self) -> Result<Self> {
        if self.status().is_success() {
            Ok(self)
        } else {
            let status = self.status().as_u16();
            // forward whatever the gateway sent, which may be nothing
            let body = self.json::<serde_json::Value>().await.ok();
            Err(Error::Gateway(GatewayError { status, body }))
        }
    }
}
