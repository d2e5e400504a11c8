use crate::{ApiError, ConfigRecord, StatRecord};
use serde::{Deserialize, Serialize};
use tracing::error;

/// The `data` payload of the ranking query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OAppData {
    #[serde(rename = "OAppStats")]
    pub stats: Vec<StatRecord>,
    #[serde(rename = "OAppSecurityConfig")]
    pub configs: Vec<ConfigRecord>,
}

/// One entry of a GraphQL `errors` array. Locations and extensions are
/// ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Deserialize, Debug)]
struct GraphQlResponse {
    data: Option<OAppData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

pub(crate) fn decode_data(body: &str) -> Result<OAppData, ApiError> {
    let response: GraphQlResponse = serde_json::from_str(body).map_err(|e| {
        error!("Unable to decode GraphQL response: {e:?}");
        ApiError::Decode(e.to_string())
    })?;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        for message in messages.iter() {
            error!("GraphQL error: {message}");
        }
        return Err(ApiError::GraphQl(messages));
    }

    response.data.ok_or(ApiError::NoData)
}
