use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// One row of `OAppSecurityConfig`. Only `oappId` is interpreted; every
/// other selected field is carried through untouched, in server order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ConfigRecord {
    #[serde(rename = "oappId")]
    pub oapp_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigRecord {
    /// A record with no extra fields.
    pub fn new(oapp_id: impl Into<String>) -> Self {
        Self {
            oapp_id: oapp_id.into(),
            extra: Map::new(),
        }
    }
}

/// Compact JSON, e.g. `{"oappId":"0xabc","requiredDVNs":[]}`.
impl Display for ConfigRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => write!(f, "{json}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
