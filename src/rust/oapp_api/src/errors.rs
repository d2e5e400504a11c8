use thiserror::Error;

/// Everything that can stop the OApp data from arriving intact.
#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Unable to build HTTP client: {0}")]
    ClientBuild(String),
    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),
    #[error("Error contacting GraphQL endpoint: {0}")]
    Transport(String),
    #[error("GraphQL endpoint returned HTTP {status}")]
    HttpStatus { status: u16, body: String },
    #[error("Unable to decode GraphQL response: {0}")]
    Decode(String),
    #[error("GraphQL query failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),
    #[error("GraphQL response contained no data")]
    NoData,
}
