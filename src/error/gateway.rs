use std::fmt::{Display, Formatter, Result};

use serde_json::Value;

/// Error payload of a non-2xx gateway response.
///
/// The gateway promises nothing about the body beyond it being JSON when
/// present, so it is kept as a raw value instead of a typed struct. A
/// response without a parseable body carries `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayError {
    pub status: u16,
    pub body: Option<Value>,
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match &self.body {
            Some(body) => write!(f, "{}: {}", self.status, body),
            None => write!(f, "{}", self.status),
        }
    }
}
