use clap::Parser;
use oapp_config::{Config, RankPolicy, ReportFormat, ReportView};
use std::path::PathBuf;

/// Ranks OApp security configurations by received packet count.
#[derive(Parser, Debug)]
#[command(name = "oapp_ranking", version)]
pub struct Args {
    /// Configuration file (defaults to $OAPP_CONFIG, then /etc/oapp_ranking.conf)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// GraphQL endpoint URL
    #[arg(long)]
    pub url: Option<String>,

    /// How many records to print
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Which list to print: unique or sorted
    #[arg(long)]
    pub view: Option<ReportView>,

    /// How repeated stats ids are ranked: last_wins or first_wins
    #[arg(long)]
    pub rank_policy: Option<RankPolicy>,

    /// Print the sample as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Command-line values take precedence over the file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.endpoint.url = url.clone();
        }
        if let Some(count) = self.count {
            config.report.sample_size = count;
        }
        if let Some(view) = self.view {
            config.report.view = view;
        }
        if let Some(policy) = self.rank_policy {
            config.report.rank_policy = policy;
        }
        if self.json {
            config.report.format = ReportFormat::Json;
        }
    }
}
