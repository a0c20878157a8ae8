pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpSchedulingService, memory::RecordingSurface, terminal::TerminalSurface};
pub use config::PlannerConfig;
pub use core::controller::{FormController, FormSettings, SubmitOutcome};
pub use utils::error::{PlannerError, Result, ServiceError, ValidationError};
