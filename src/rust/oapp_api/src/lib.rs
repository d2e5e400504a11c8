//! OApp GraphQL Data Structures
//!
//! Strong-typed client for the two OApp datasets the ranking report
//! joins: per-application packet statistics and per-application security
//! configurations. Both are fetched in a single GraphQL round-trip.

mod errors; // Failure modes of a fetch
mod query; // The fixed GraphQL document and its variables
mod response; // GraphQL envelope and the `data` payload
mod rest; // reqwest-backed HTTP transport
mod security_config; // OAppSecurityConfig record
mod stat_record; // OAppStats record
mod transport; // Transport seam

pub use errors::ApiError;
pub use query::{build_query_document, GraphQlRequest, QueryVariables};
pub use response::{GraphQlError, OAppData};
pub use rest::{endpoint_fixup, HttpTransport};
pub use security_config::ConfigRecord;
pub use stat_record::StatRecord;
pub use transport::{GraphQlTransport, TransportResponse};

use oapp_config::QueryConfig;
use tracing::{error, info};

/// Loads both OApp lists in one request.
///
/// Any non-2xx status aborts before the body is looked at. A 2xx body that
/// carries GraphQL `errors`, or no `data`, is also an error.
pub async fn load_ranking_data<T>(
    transport: &T,
    query: &QueryConfig,
) -> Result<OAppData, ApiError>
where
    T: GraphQlTransport + ?Sized,
{
    let request = GraphQlRequest::new(query);
    let response = transport.post(&request).await?;

    if !response.is_success() {
        error!("GraphQL endpoint returned HTTP {}", response.status);
        return Err(ApiError::HttpStatus {
            status: response.status,
            body: response.body,
        });
    }

    let data = response::decode_data(&response.body)?;
    info!(
        "Received {} OAppStats and {} OAppSecurityConfig records",
        data.stats.len(),
        data.configs.len()
    );
    Ok(data)
}
