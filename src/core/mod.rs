pub mod controller;
pub mod render;
pub mod validation;

pub use crate::domain::model::{DayPlan, GenerationRequest, Schedule, UiState};
pub use crate::domain::ports::{SchedulingService, Surface};
pub use crate::utils::error::{Result, ServiceError, ValidationError};
