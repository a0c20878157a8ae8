use anyhow::Result;
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use study_planner::app::session::{run_once, run_session, SessionSummary};
use study_planner::core::render::ScheduleItem;
use study_planner::{
    FormController, FormSettings, HttpSchedulingService, PlannerError, RecordingSurface,
    TerminalSurface, ValidationError,
};

const PATH: &str = "/api/generate-schedule";

/// 請求進行中再次 submit 只會送出一次請求
#[tokio::test]
async fn test_session_ignores_submit_while_loading() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body(serde_json::json!({
                "subject": "Biology",
                "preparationDays": 10,
                "targetScore": 80
            }));
            then.status(200)
                .delay(Duration::from_millis(300))
                .json_body(serde_json::json!({
                    "schedule": [
                        {"day": 1, "topics": ["Cell structure"]},
                        {"day": 2, "topics": ["Genetics", "Evolution"]}
                    ]
                }));
        })
        .await;

    let service = Arc::new(HttpSchedulingService::new(server.url(PATH)));
    let mut controller =
        FormController::new(service, RecordingSurface::new(), FormSettings::default());
    let input: &[u8] = b"subject Biology\ndays 10\nscore 80\nsubmit\nsubmit\ndays 99\n";
    let mut notices = Vec::new();

    let summary = run_session(&mut controller, input, &mut notices).await?;

    assert_eq!(
        summary,
        SessionSummary {
            requests: 1,
            rejected: 0,
            ignored: 1,
            completed: 1,
            failed: 0,
        }
    );
    assert_eq!(api_mock.hits_async().await, 1);
    // loading 期間的欄位修改會被忽略
    assert_eq!(controller.fields().preparation_days, "10");

    let view = controller.surface().last().expect("a rendered view");
    assert_eq!(
        view.schedule.as_ref().map(|items| items.len()),
        Some(2)
    );
    assert!(matches!(
        &view.schedule.as_ref().unwrap()[1],
        ScheduleItem::Day { heading, topics } if heading == "Day 2" && topics.len() == 2
    ));
    Ok(())
}

#[tokio::test]
async fn test_session_reports_bad_input() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(serde_json::json!({"schedule": []}));
        })
        .await;

    let service = Arc::new(HttpSchedulingService::new(server.url(PATH)));
    let mut controller =
        FormController::new(service, RecordingSurface::new(), FormSettings::default());
    let input: &[u8] = b"subject Astrology\ndays abc\nscore 80\nsubmit\nhelp\ndance\nquit\nsubmit\n";
    let mut notices = Vec::new();

    let summary = run_session(&mut controller, input, &mut notices).await?;

    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.requests, 0);
    assert_eq!(api_mock.hits_async().await, 0);

    let notices = String::from_utf8(notices)?;
    assert!(notices.contains("Unknown subject 'Astrology'"));
    assert!(notices.contains("Commands:"));
    assert!(notices.contains("Unknown command 'dance'"));

    let view = controller.surface().last().expect("a rendered view");
    assert_eq!(view.error.as_deref(), Some("Please fill in all fields."));
    Ok(())
}

#[tokio::test]
async fn test_session_reset_after_failure() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(400).json_body(serde_json::json!({
                "message": "Currently only \"Biology\" subject is supported."
            }));
        })
        .await;

    let service = Arc::new(HttpSchedulingService::new(server.url(PATH)));
    let mut controller =
        FormController::new(service, RecordingSurface::new(), FormSettings::default());
    let input: &[u8] = b"subject Physics\ndays 7\nscore 65\nsubmit\n";
    let mut notices = Vec::new();

    let summary = run_session(&mut controller, input, &mut notices).await?;
    assert_eq!(summary.failed, 1);
    let view = controller.surface().last().expect("a rendered view");
    assert_eq!(
        view.error.as_deref(),
        Some("Currently only \"Biology\" subject is supported.")
    );

    let summary = run_session(&mut controller, &b"reset\n"[..], &mut notices).await?;
    assert_eq!(summary, SessionSummary::default());
    let view = controller.surface().last().expect("a rendered view");
    assert!(view.error.is_none());
    assert_eq!(view.fields.subject, "Biology");
    assert!(view.fields.preparation_days.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_run_once_prints_schedule() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(serde_json::json!({
                "schedule": [{"day": 1, "topics": ["Cell structure"]}]
            }));
        })
        .await;

    let service = Arc::new(HttpSchedulingService::new(server.url(PATH)));
    let mut controller =
        FormController::new(service, TerminalSurface::new(Vec::new()), FormSettings::default());

    let schedule = run_once(&mut controller, Some("Biology"), Some("10"), Some("80")).await?;
    assert_eq!(schedule.len(), 1);
    assert_eq!(api_mock.hits_async().await, 1);

    let printed = String::from_utf8(controller.surface().get_ref().clone())?;
    assert!(printed.contains("Day 1\n  1. Cell structure\n"));

    let err = run_once(&mut controller, None, Some("10"), None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PlannerError::Validation(ValidationError::MissingField)
    ));
    assert_eq!(api_mock.hits_async().await, 1);
    Ok(())
}

/// 未知科目不會被預設科目取代後送出
#[tokio::test]
async fn test_run_once_rejects_unknown_subject() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200).json_body(serde_json::json!({"schedule": []}));
        })
        .await;

    let service = Arc::new(HttpSchedulingService::new(server.url(PATH)));
    let mut controller =
        FormController::new(service, RecordingSurface::new(), FormSettings::default());

    let err = run_once(&mut controller, Some("Astrology"), Some("10"), Some("80"))
        .await
        .unwrap_err();

    assert!(matches!(
        &err,
        PlannerError::UnknownSubject { subject, .. } if subject == "Astrology"
    ));
    assert!(err.user_friendly_message().contains("Biology, Chemistry, Physics, Mathematics"));
    assert_eq!(api_mock.hits_async().await, 0);
    assert!(controller.surface().views().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_run_once_surfaces_service_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(500)
                .json_body(serde_json::json!({"message": "backend overloaded"}));
        })
        .await;

    let service = Arc::new(HttpSchedulingService::new(server.url(PATH)));
    let mut controller =
        FormController::new(service, RecordingSurface::new(), FormSettings::default());

    let err = run_once(&mut controller, Some("Biology"), Some("10"), Some("80"))
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::Service(_)));
    assert_eq!(err.user_friendly_message(), "backend overloaded");
    Ok(())
}
