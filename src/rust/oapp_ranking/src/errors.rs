use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RankingError {
    #[error("Unable to load configuration")]
    CannotLoadConfig,
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Unable to set up the GraphQL client")]
    ClientSetup,
    #[error("Error contacting the GraphQL endpoint")]
    GraphQlConnectError,
    #[error("GraphQL endpoint returned HTTP {0}")]
    GraphQlHttpStatus(u16),
    #[error("GraphQL response was unusable")]
    GraphQlResponseError,
    #[error("Unable to write report")]
    ReportOutputError,
}
