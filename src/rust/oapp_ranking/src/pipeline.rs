//! Fetches both OApp lists, ranks the configs and writes the report.

use crate::errors::RankingError;
use crate::ordering::OrderedConfigs;
use crate::rank_index::RankIndex;
use crate::report::write_report;
use oapp_api::{ApiError, GraphQlTransport};
use oapp_config::Config;
use std::io::Write;
use tracing::{error, info, warn};

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub stats: usize,
    pub configs: usize,
    pub unique: usize,
    pub unknown: usize,
    pub printed: usize,
}

pub(crate) fn map_api_error(e: ApiError) -> RankingError {
    error!("{e}");
    match e {
        ApiError::ClientBuild(_) | ApiError::InvalidHeader(_) => RankingError::ClientSetup,
        ApiError::Transport(_) => RankingError::GraphQlConnectError,
        ApiError::HttpStatus { status, body } => {
            if !body.is_empty() {
                error!("Response body: {body}");
            }
            RankingError::GraphQlHttpStatus(status)
        }
        ApiError::Decode(_) | ApiError::GraphQl(_) | ApiError::NoData => {
            RankingError::GraphQlResponseError
        }
    }
}

/// Runs the whole report against `transport`, writing to `out`.
///
/// Nothing is written unless the fetch succeeds.
pub async fn run<T, W>(
    config: &Config,
    transport: &T,
    out: &mut W,
) -> Result<RunSummary, RankingError>
where
    T: GraphQlTransport + ?Sized,
    W: Write,
{
    let data = oapp_api::load_ranking_data(transport, &config.query)
        .await
        .map_err(map_api_error)?;

    let index = RankIndex::build(&data.stats, config.report.rank_policy);
    if index.is_empty() {
        warn!("OAppStats came back empty, configs will be printed in server order");
    }
    let configs = data.configs.len();
    let ordered = OrderedConfigs::new(data.configs, &index);
    let unknown = ordered
        .unique
        .iter()
        .filter(|c| !index.contains(&c.oapp_id))
        .count();
    info!(
        "Ranked {} applications; {} configs collapse to {} unique",
        index.len(),
        configs,
        ordered.unique.len()
    );
    if unknown > 0 {
        warn!("{unknown} configs have no OAppStats entry and sort last");
    }

    let records = ordered.view(config.report.view);
    write_report(out, records, config.report.sample_size, config.report.format).map_err(|e| {
        error!("Unable to write report: {e:?}");
        RankingError::ReportOutputError
    })?;

    Ok(RunSummary {
        stats: data.stats.len(),
        configs,
        unique: ordered.unique.len(),
        unknown,
        printed: records.len().min(config.report.sample_size),
    })
}
