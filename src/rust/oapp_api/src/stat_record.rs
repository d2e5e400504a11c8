use serde::{de, Deserialize, Deserializer, Serialize};

/// One row of `OAppStats`: an application and how many packets it has
/// received. The server returns these highest count first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatRecord {
    pub id: String,
    #[serde(
        rename = "totalPacketsReceived",
        deserialize_with = "packet_count"
    )]
    pub total_packets_received: u64,
}

/// Hasura serializes `bigint`/`numeric` columns as strings, so accept both.
fn packet_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    match Count::deserialize(deserializer)? {
        Count::Number(n) => Ok(n),
        Count::Text(s) => s.trim().parse().map_err(|_| {
            de::Error::custom(format!("totalPacketsReceived [{s}] is not a packet count"))
        }),
    }
}
