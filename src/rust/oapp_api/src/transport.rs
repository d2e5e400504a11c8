use crate::{ApiError, GraphQlRequest};
use async_trait::async_trait;

/// Raw outcome of a POST: the status code and the unparsed body. Status
/// checking and decoding happen above the transport so every
/// implementation fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can deliver a GraphQL request to the endpoint.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn post(&self, request: &GraphQlRequest) -> Result<TransportResponse, ApiError>;
}

#[cfg(test)]
mod test {
    use super::*;

    fn response(status: u16) -> TransportResponse {
        TransportResponse {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn success_range() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(401).is_success());
        assert!(!response(500).is_success());
    }
}
