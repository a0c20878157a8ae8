use serde::{Deserialize, Serialize};

/// 送往排程服務的已驗證請求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub subject: String,
    pub preparation_days: u32,
    pub target_score: u8,
}

/// 排程中單日的主題清單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub topics: Vec<String>,
}

/// 依服務回傳順序排列的每日計畫
pub type Schedule = Vec<DayPlan>;

/// 成功回應內容，缺少或為 null 的 `schedule` 視為空排程
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl ScheduleResponse {
    pub fn into_schedule(self) -> Schedule {
        self.schedule.unwrap_or_default()
    }
}

/// 失敗回應內容，非字串的 `message` 一律忽略
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// 錯誤訊息下方仍顯示的內容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Backdrop {
    #[default]
    Placeholder,
    Schedule(Schedule),
    Blank,
}

/// 表單目前顯示內容的唯一狀態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading { message: String },
    Success(Schedule),
    Error { message: String, backdrop: Backdrop },
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn controls_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// 從此狀態顯示錯誤時，錯誤下方保留的內容
    pub fn backdrop(&self) -> Backdrop {
        match self {
            UiState::Idle => Backdrop::Placeholder,
            UiState::Loading { .. } => Backdrop::Blank,
            UiState::Success(schedule) => Backdrop::Schedule(schedule.clone()),
            UiState::Error { backdrop, .. } => backdrop.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading { .. } => "loading",
            UiState::Success(_) => "success",
            UiState::Error { .. } => "error",
        }
    }
}

/// 三個表單欄位的原始輸入值
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub subject: String,
    pub preparation_days: String,
    pub target_score: String,
}

impl FormFields {
    pub fn with_subject(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerationRequest {
            subject: "Biology".to_string(),
            preparation_days: 10,
            target_score: 80,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"subject": "Biology", "preparationDays": 10, "targetScore": 80})
        );
    }

    #[test]
    fn test_missing_schedule_is_empty() {
        let response: ScheduleResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_schedule().is_empty());

        let response: ScheduleResponse = serde_json::from_str(r#"{"schedule": null}"#).unwrap();
        assert!(response.into_schedule().is_empty());
    }

    #[test]
    fn test_backdrop_follows_state() {
        assert_eq!(UiState::Idle.backdrop(), Backdrop::Placeholder);
        let schedule = vec![DayPlan {
            day: 1,
            topics: vec!["Genetics".to_string()],
        }];
        assert_eq!(
            UiState::Success(schedule.clone()).backdrop(),
            Backdrop::Schedule(schedule.clone())
        );
        let error = UiState::Error {
            message: "x".to_string(),
            backdrop: Backdrop::Schedule(schedule.clone()),
        };
        assert_eq!(error.backdrop(), Backdrop::Schedule(schedule));
        assert!(!UiState::Loading {
            message: "busy".to_string()
        }
        .controls_enabled());
    }
}
