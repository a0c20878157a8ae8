pub mod file;

pub use file::PlannerConfig;

#[cfg(feature = "cli")]
use crate::adapters::http::DEFAULT_ENDPOINT;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "study-planner")]
#[command(about = "Generate a day-by-day study schedule from a remote scheduling service")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT, help = "Scheduling service endpoint")]
    pub endpoint: String,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Subject to plan for")]
    pub subject: Option<String>,

    #[arg(long, help = "Preparation days (runs a single request and exits)")]
    pub days: Option<String>,

    #[arg(long, help = "Target score 1-100 (runs a single request and exits)")]
    pub score: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 有指定天數或分數時只送出一次請求
    pub fn is_one_shot(&self) -> bool {
        self.days.is_some() || self.score.is_some()
    }

    /// 載入指定的設定檔並套用命令列覆蓋
    pub fn resolve(&self) -> Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::from_file(path)?,
            None => PlannerConfig::default(),
        };

        if self.endpoint != DEFAULT_ENDPOINT {
            tracing::debug!("Endpoint overridden to: {}", self.endpoint);
            config.service.endpoint = self.endpoint.clone();
        }

        Ok(config)
    }
}
