//! Top-level configuration file for the ranking report.

use crate::{AuthMode, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://shinken.business/v1/graphql";

/// Page size that is, in practice, "everything".
pub const UNBOUNDED_LIMIT: i32 = 1_000_000_000;

/// Top-level configuration file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Where the GraphQL endpoint lives
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Authentication mode. Omitting the table means no authentication.
    #[serde(default)]
    pub auth: AuthMode,

    /// Query variables and selection options
    #[serde(default)]
    pub query: QueryConfig,

    /// How the result is ranked and printed
    #[serde(default)]
    pub report: ReportConfig,
}

/// Connection details for the GraphQL endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EndpointConfig {
    /// Full URL of the GraphQL endpoint, e.g. `https://host/v1/graphql`
    pub url: String,

    /// Request timeout. `None` leaves the transport default in place.
    pub timeout_seconds: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Variables and selection options for the fixed query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size for `OAppSecurityConfig`
    pub limit: i32,

    /// Page offset for `OAppSecurityConfig`
    pub offset: i32,

    /// Only request configurations that still use the default config
    pub only_default_configs: bool,

    /// Extra `OAppSecurityConfig` fields to select alongside `oappId`
    pub config_fields: Vec<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            limit: UNBOUNDED_LIMIT,
            offset: 0,
            only_default_configs: true,
            config_fields: vec![],
        }
    }
}

/// Report shaping options.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// How many records to print
    pub sample_size: usize,

    /// Which transformed list to print
    pub view: ReportView,

    /// How repeated stats identifiers are ranked
    pub rank_policy: RankPolicy,

    /// Plain text lines or a JSON array
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_size: 10,
            view: ReportView::Unique,
            rank_policy: RankPolicy::LastWins,
            format: ReportFormat::Text,
        }
    }
}

/// Which of the two transformed lists is reported.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportView {
    /// One record per application id, in rank order
    #[default]
    Unique,
    /// Every record, in rank order (duplicates kept)
    Sorted,
}

/// What happens when an application id appears more than once in the
/// stats list.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankPolicy {
    /// The later position overwrites the earlier one
    #[default]
    LastWins,
    /// The first position is kept
    FirstWins,
}

/// Output format for the reporter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// A header line, then one compact JSON object per line
    #[default]
    Text,
    /// A single pretty-printed JSON array
    Json,
}

macro_rules! snake_case_enum {
    ($t:ty, $( $variant:path => $name:literal ),+ ) => {
        impl Display for $t {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( $variant => write!(f, $name), )+
                }
            }
        }

        impl FromStr for $t {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $( $name => Ok($variant), )+
                    other => Err(format!(
                        "unknown value '{other}', expected one of: {}",
                        [$( $name ),+].join(", ")
                    )),
                }
            }
        }
    };
}

snake_case_enum!(ReportView, ReportView::Unique => "unique", ReportView::Sorted => "sorted");
snake_case_enum!(RankPolicy, RankPolicy::LastWins => "last_wins", RankPolicy::FirstWins => "first_wins");
snake_case_enum!(ReportFormat, ReportFormat::Text => "text", ReportFormat::Json => "json");

fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

impl Config {
    /// Test if a configuration is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigError::Invalid("endpoint.url must be set".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "endpoint.url [{url}] must start with http:// or https://"
            )));
        }
        if self.endpoint.timeout_seconds == Some(0) {
            return Err(ConfigError::Invalid(
                "endpoint.timeout_seconds must be greater than zero".to_string(),
            ));
        }
        self.auth.validate()?;
        if self.query.limit < 0 {
            return Err(ConfigError::Invalid(format!(
                "query.limit must not be negative (got {})",
                self.query.limit
            )));
        }
        if self.query.offset < 0 {
            return Err(ConfigError::Invalid(format!(
                "query.offset must not be negative (got {})",
                self.query.offset
            )));
        }
        if let Some(bad) = self
            .query
            .config_fields
            .iter()
            .find(|f| !is_graphql_name(f))
        {
            return Err(ConfigError::Invalid(format!(
                "query.config_fields entry [{bad}] is not a GraphQL field name"
            )));
        }
        if self.report.sample_size == 0 {
            return Err(ConfigError::Invalid(
                "report.sample_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses a configuration from TOML text without range checks, so
    /// command-line overrides can be applied before [`Config::validate`].
    pub fn parse_from_string(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::CannotParse(e.to_string()))
    }

    /// Parses and validates a configuration from TOML text.
    pub fn load_from_string(s: &str) -> Result<Self, ConfigError> {
        let config = Self::parse_from_string(s)?;
        config.validate()?;
        Ok(config)
    }
}
