use crate::domain::model::{Backdrop, DayPlan, FormFields, UiState};

pub const INITIAL_MESSAGE: &str =
    "Choose a subject, your preparation days and target score, then generate your schedule.";
pub const DEFAULT_LOADING_MESSAGE: &str = "Generating your personalized schedule...";
pub const NO_SCHEDULE_MESSAGE: &str = "No schedule generated.";

/// 排程清單中的一個項目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleItem {
    Day { heading: String, topics: Vec<String> },
    Empty(String),
}

/// 畫面所需的全部內容
///
/// 四個顯示區塊為 `placeholder`、`busy`、`error` 與 `schedule`，`None` 表示隱藏。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub placeholder: Option<String>,
    pub busy: Option<String>,
    pub error: Option<String>,
    pub schedule: Option<Vec<ScheduleItem>>,
    pub controls_enabled: bool,
    pub fields: FormFields,
}

impl View {
    fn blank(fields: &FormFields, controls_enabled: bool) -> Self {
        Self {
            placeholder: None,
            busy: None,
            error: None,
            schedule: None,
            controls_enabled,
            fields: fields.clone(),
        }
    }
}

/// 將 UI 狀態對應到各顯示區塊，不產生副作用
pub fn render(state: &UiState, fields: &FormFields) -> View {
    let mut view = View::blank(fields, state.controls_enabled());
    match state {
        UiState::Idle => {
            view.placeholder = Some(INITIAL_MESSAGE.to_string());
        }
        UiState::Loading { message } => {
            view.busy = Some(message.clone());
        }
        UiState::Success(schedule) => {
            view.schedule = Some(schedule_items(schedule));
        }
        UiState::Error { message, backdrop } => {
            view.error = Some(message.clone());
            match backdrop {
                Backdrop::Placeholder => view.placeholder = Some(INITIAL_MESSAGE.to_string()),
                Backdrop::Schedule(schedule) => view.schedule = Some(schedule_items(schedule)),
                Backdrop::Blank => {}
            }
        }
    }
    view
}

fn schedule_items(schedule: &[DayPlan]) -> Vec<ScheduleItem> {
    if schedule.is_empty() {
        return vec![ScheduleItem::Empty(NO_SCHEDULE_MESSAGE.to_string())];
    }

    schedule
        .iter()
        .map(|plan| ScheduleItem::Day {
            heading: format!("Day {}", plan.day),
            topics: plan.topics.clone(),
        })
        .collect()
}
