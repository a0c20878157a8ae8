use crate::core::render::{self, DEFAULT_LOADING_MESSAGE};
use crate::core::validation;
use crate::domain::model::{Backdrop, FormFields, GenerationRequest, Schedule, UiState};
use crate::domain::ports::{SchedulingService, Surface};
use crate::utils::error::{ServiceError, ValidationError};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// 進行中的排程請求，與控制器分離，讓事件迴圈在等待時仍可處理輸入
pub type PendingRequest =
    Pin<Box<dyn Future<Output = Result<Schedule, ServiceError>> + Send + 'static>>;

pub const DEFAULT_SUBJECTS: [&str; 4] = ["Biology", "Chemistry", "Physics", "Mathematics"];
pub const DEFAULT_SUBJECT: &str = "Biology";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub subjects: Vec<String>,
    pub default_subject: String,
    pub loading_message: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            default_subject: DEFAULT_SUBJECT.to_string(),
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
        }
    }
}

pub enum Submission {
    Dispatched(PendingRequest),
    Rejected(ValidationError),
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered(Schedule),
    Invalid(ValidationError),
    Failed(ServiceError),
    /// 控制項停用中，未送出任何請求
    Busy,
}

pub struct FormController<S: SchedulingService + 'static, R: Surface> {
    service: Arc<S>,
    surface: R,
    settings: FormSettings,
    fields: FormFields,
    state: UiState,
}

impl<S: SchedulingService + 'static, R: Surface> FormController<S, R> {
    pub fn new(service: Arc<S>, surface: R, settings: FormSettings) -> Self {
        let fields = FormFields::with_subject(settings.default_subject.clone());
        Self {
            service,
            surface,
            settings,
            fields,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn controls_enabled(&self) -> bool {
        self.state.controls_enabled()
    }

    /// 只接受設定中的科目選項
    pub fn select_subject(&mut self, subject: &str) -> bool {
        if !self.editable("subject") {
            return false;
        }
        if !self.settings.subjects.iter().any(|s| s == subject) {
            tracing::warn!("Unknown subject '{}', keeping '{}'", subject, self.fields.subject);
            return false;
        }
        self.fields.subject = subject.to_string();
        true
    }

    pub fn set_preparation_days(&mut self, raw: &str) -> bool {
        if !self.editable("preparation days") {
            return false;
        }
        self.fields.preparation_days = raw.to_string();
        true
    }

    pub fn set_target_score(&mut self, raw: &str) -> bool {
        if !self.editable("target score") {
            return false;
        }
        self.fields.target_score = raw.to_string();
        true
    }

    fn editable(&self, field: &str) -> bool {
        if !self.controls_enabled() {
            tracing::debug!("Ignoring {} edit while a request is in flight", field);
            return false;
        }
        true
    }

    pub fn validate(&self) -> Result<GenerationRequest, ValidationError> {
        validation::validate(
            &self.fields.subject,
            &self.fields.preparation_days,
            &self.fields.target_score,
        )
    }

    /// 送出按鈕的處理函式：驗證、等待請求完成並渲染結果
    pub async fn on_submit(&mut self) -> SubmitOutcome {
        match self.submit() {
            Submission::Busy => SubmitOutcome::Busy,
            Submission::Rejected(e) => SubmitOutcome::Invalid(e),
            Submission::Dispatched(pending) => {
                let outcome = pending.await;
                self.complete(outcome)
            }
        }
    }

    /// 送出的前半段：驗證通過後進入 Loading 並回傳請求 future，
    /// 需搭配 [`FormController::complete`] 使用
    pub fn submit(&mut self) -> Submission {
        if self.state.is_loading() {
            tracing::debug!("Submit ignored: a request is already in flight");
            return Submission::Busy;
        }

        match self.validate() {
            Ok(request) => Submission::Dispatched(self.begin_generation(request, None)),
            Err(e) => {
                tracing::debug!("Validation failed: {:?}", e);
                // 舊的錯誤訊息被取代，背景維持不變
                let backdrop = self.state.backdrop();
                self.transition(UiState::Error {
                    message: e.to_string(),
                    backdrop,
                });
                self.render();
                Submission::Rejected(e)
            }
        }
    }

    /// 送出的後半段：離開 Loading、套用結果並渲染
    pub fn complete(&mut self, outcome: Result<Schedule, ServiceError>) -> SubmitOutcome {
        let result = self.finish_generation(outcome);
        self.render();
        match result {
            Ok(schedule) => SubmitOutcome::Rendered(schedule),
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    /// 送出一次請求並等待結果，回傳前離開 Loading，最終渲染由呼叫端負責
    pub async fn generate_schedule(
        &mut self,
        request: GenerationRequest,
        loading_message: Option<&str>,
    ) -> Result<Schedule, ServiceError> {
        let pending = self.begin_generation(request, loading_message);
        let outcome = pending.await;
        self.finish_generation(outcome)
    }

    fn begin_generation(
        &mut self,
        request: GenerationRequest,
        loading_message: Option<&str>,
    ) -> PendingRequest {
        let message = loading_message
            .map(str::to_string)
            .unwrap_or_else(|| self.settings.loading_message.clone());
        self.transition(UiState::Loading { message });
        self.render();

        tracing::info!(
            "📤 Requesting {}-day {} schedule (target {}%)",
            request.preparation_days,
            request.subject,
            request.target_score
        );

        let service = Arc::clone(&self.service);
        Box::pin(async move { service.generate(&request).await })
    }

    fn finish_generation(
        &mut self,
        outcome: Result<Schedule, ServiceError>,
    ) -> Result<Schedule, ServiceError> {
        if !self.state.is_loading() {
            tracing::debug!("Applying request outcome outside of loading state");
        }

        match &outcome {
            Ok(schedule) => {
                tracing::info!("✅ Received schedule with {} days", schedule.len());
                self.transition(UiState::Success(schedule.clone()));
            }
            Err(e) => {
                tracing::warn!("❌ Error generating schedule: {}", e);
                self.transition(UiState::Error {
                    message: e.message(),
                    backdrop: Backdrop::Blank,
                });
            }
        }
        outcome
    }

    /// 重設按鈕的處理函式，控制項停用時忽略
    pub fn on_reset(&mut self) -> bool {
        if !self.controls_enabled() {
            tracing::debug!("Reset ignored: a request is in flight");
            return false;
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.fields = FormFields::with_subject(self.settings.default_subject.clone());
        self.transition(UiState::Idle);
        self.render();
    }

    pub fn render(&mut self) {
        let view = render::render(&self.state, &self.fields);
        self.surface.present(&view);
    }

    fn transition(&mut self, next: UiState) {
        tracing::debug!("UI state {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
