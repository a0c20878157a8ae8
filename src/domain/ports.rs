use crate::core::render::View;
use crate::domain::model::{GenerationRequest, Schedule};
use crate::utils::error::ServiceError;
use async_trait::async_trait;

/// 將請求轉成逐日排程的遠端服務
#[async_trait]
pub trait SchedulingService: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<Schedule, ServiceError>;
}

/// 畫面輸出的目的地
pub trait Surface {
    fn present(&mut self, view: &View);
}
