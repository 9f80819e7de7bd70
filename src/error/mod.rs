pub use gateway::GatewayError;

mod gateway;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// gateway rejected the request, error body forwarded as-is
    #[error("gateway error: {0}")]
    Gateway(GatewayError),
    /// request never produced an HTTP response
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
