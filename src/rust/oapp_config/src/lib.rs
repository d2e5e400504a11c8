//! Configuration for the OApp ranking report.
//!
//! Loads the `/etc/oapp_ranking.conf` TOML file (or the file named by
//! `OAPP_CONFIG`) into a strongly-typed [`Config`]. Everything the report
//! needs to know about the GraphQL endpoint, authentication and the shape
//! of the output lives here, so the pipeline itself never reads globals.

#![warn(missing_docs)]

mod auth;
mod config;
mod errors;
mod load;

pub use auth::{AuthMode, ADMIN_SECRET_HEADER, AUTHORIZATION_HEADER};
pub use config::{
    Config, EndpointConfig, QueryConfig, RankPolicy, ReportConfig, ReportFormat, ReportView,
    DEFAULT_ENDPOINT, UNBOUNDED_LIMIT,
};
pub use errors::ConfigError;
pub use load::{load_config, resolve_config_path, ConfigSource, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
