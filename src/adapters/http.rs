use crate::domain::model::{ErrorBody, GenerationRequest, Schedule, ScheduleResponse};
use crate::domain::ports::SchedulingService;
use crate::utils::error::{ServiceError, FALLBACK_SERVICE_MESSAGE};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/generate-schedule";

/// 以單一 JSON POST 呼叫排程服務，不重試、不設逾時
#[derive(Debug, Clone)]
pub struct HttpSchedulingService {
    client: Client,
    endpoint: String,
}

impl HttpSchedulingService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SchedulingService for HttpSchedulingService {
    async fn generate(&self, request: &GenerationRequest) -> Result<Schedule, ServiceError> {
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            // 嘗試從回應內容取出錯誤訊息，失敗則使用預設訊息
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| FALLBACK_SERVICE_MESSAGE.to_string());
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        let parsed: ScheduleResponse = serde_json::from_slice(&body)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        Ok(parsed.into_schedule())
    }
}
