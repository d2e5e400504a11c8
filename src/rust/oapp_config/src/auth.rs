//! Authentication modes for the GraphQL endpoint.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Header carrying a Hasura admin secret.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Standard bearer/JWT header.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// How (if at all) requests to the endpoint authenticate.
///
/// In the configuration file this is the `[auth]` table, selected by `mode`:
///
/// ```toml
/// [auth]
/// mode = "bearer"
/// token = "eyJhbGciOi..."
/// ```
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum AuthMode {
    /// No authentication header is sent.
    #[default]
    None,
    /// Send `x-hasura-admin-secret: <value>`.
    Secret {
        /// The admin secret
        value: String,
    },
    /// Send `Authorization: Bearer <token>`.
    Bearer {
        /// The bearer token (usually a JWT)
        token: String,
    },
}

impl AuthMode {
    /// Resolves the mode into the single header it contributes, if any.
    pub fn header(&self) -> Option<(&'static str, String)> {
        match self {
            Self::None => None,
            Self::Secret { value } => Some((ADMIN_SECRET_HEADER, value.clone())),
            Self::Bearer { token } => Some((AUTHORIZATION_HEADER, format!("Bearer {token}"))),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::None => Ok(()),
            Self::Secret { value } if value.trim().is_empty() => Err(ConfigError::Invalid(
                "auth mode \"secret\" requires a non-empty value".to_string(),
            )),
            Self::Bearer { token } if token.trim().is_empty() => Err(ConfigError::Invalid(
                "auth mode \"bearer\" requires a non-empty token".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

// Credentials never reach the logs.
impl Debug for AuthMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Secret { .. } => write!(f, "Secret {{ value: <redacted> }}"),
            Self::Bearer { .. } => write!(f, "Bearer {{ token: <redacted> }}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn none_sends_no_header() {
        assert_eq!(AuthMode::None.header(), None);
    }

    #[test]
    fn secret_uses_hasura_header() {
        let auth = AuthMode::Secret {
            value: "hunter2".to_string(),
        };
        assert_eq!(
            auth.header(),
            Some((ADMIN_SECRET_HEADER, "hunter2".to_string()))
        );
    }

    #[test]
    fn bearer_prefixes_token() {
        let auth = AuthMode::Bearer {
            token: "abc.def".to_string(),
        };
        assert_eq!(
            auth.header(),
            Some((AUTHORIZATION_HEADER, "Bearer abc.def".to_string()))
        );
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let secret = AuthMode::Secret {
            value: "  ".to_string(),
        };
        assert!(secret.validate().is_err());
        let bearer = AuthMode::Bearer {
            token: String::new(),
        };
        assert!(bearer.validate().is_err());
        assert!(AuthMode::None.validate().is_ok());
    }

    #[test]
    fn debug_output_is_redacted() {
        let auth = AuthMode::Secret {
            value: "hunter2".to_string(),
        };
        let printed = format!("{auth:?}");
        assert!(!printed.contains("hunter2"));
    }
}
