use crate::core::controller::{FormController, PendingRequest, SubmitOutcome, Submission};
use crate::domain::model::Schedule;
use crate::domain::ports::{SchedulingService, Surface};
use crate::utils::error::{PlannerError, Result, ServiceError};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub const HELP_TEXT: &str = "\
Commands:
  subject <name>   choose the subject
  days <n>         preparation days
  score <n>        target score (1-100)
  submit           generate the schedule
  reset            clear the form
  show             redraw the form
  help             show this help
  quit             exit (waits for a running request)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Subject(String),
    Days(String),
    Score(String),
    Submit,
    Reset,
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// 解析一行輸入，空白行回傳 `None`
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "subject" => Command::Subject(rest.to_string()),
        "days" => Command::Days(rest.to_string()),
        "score" => Command::Score(rest.to_string()),
        "submit" | "generate" => Command::Submit,
        "reset" => Command::Reset,
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    };
    Some(command)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub requests: usize,
    pub rejected: usize,
    pub ignored: usize,
    pub completed: usize,
    pub failed: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Rendered(_) => self.completed += 1,
            SubmitOutcome::Failed(_) => self.failed += 1,
            SubmitOutcome::Invalid(_) => self.rejected += 1,
            SubmitOutcome::Busy => self.ignored += 1,
        }
    }
}

async fn wait_for(pending: &mut Option<PendingRequest>) -> std::result::Result<Schedule, ServiceError> {
    match pending {
        Some(request) => request.await,
        None => std::future::pending().await,
    }
}

/// 以逐行指令驅動表單
///
/// 請求進行中仍持續讀取輸入，但 submit 與欄位修改會被忽略。
/// 輸入結束時會等待進行中的請求完成並套用結果。
pub async fn run_session<S, R, I, W>(
    controller: &mut FormController<S, R>,
    input: I,
    notices: &mut W,
) -> Result<SessionSummary>
where
    S: SchedulingService + 'static,
    R: Surface,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut pending: Option<PendingRequest> = None;
    let mut summary = SessionSummary::default();
    let mut input_open = true;

    controller.render();

    loop {
        if !input_open {
            if let Some(request) = pending.take() {
                tracing::debug!("Input closed, waiting for the running request");
                let outcome = request.await;
                summary.record(controller.complete(outcome));
            }
            break;
        }

        tokio::select! {
            outcome = wait_for(&mut pending), if pending.is_some() => {
                pending = None;
                summary.record(controller.complete(outcome));
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                let Some(command) = parse_command(&line) else {
                    continue;
                };
                tracing::debug!("Command: {:?}", command);

                match command {
                    Command::Subject(subject) => {
                        if !controller.select_subject(&subject) && controller.controls_enabled() {
                            writeln!(notices, "{}", unknown_subject(controller, &subject))?;
                        }
                    }
                    Command::Days(raw) => {
                        controller.set_preparation_days(&raw);
                    }
                    Command::Score(raw) => {
                        controller.set_target_score(&raw);
                    }
                    Command::Submit => match controller.submit() {
                        Submission::Dispatched(request) => {
                            summary.requests += 1;
                            pending = Some(request);
                        }
                        Submission::Rejected(_) => summary.rejected += 1,
                        Submission::Busy => summary.ignored += 1,
                    },
                    Command::Reset => {
                        controller.on_reset();
                    }
                    Command::Show => controller.render(),
                    Command::Help => write!(notices, "{}", HELP_TEXT)?,
                    Command::Quit => input_open = false,
                    Command::Unknown(text) => {
                        writeln!(notices, "Unknown command '{}'. Type 'help' for commands.", text)?;
                    }
                }
            }
        }
    }

    tracing::info!(
        "Session finished: {} requests, {} completed, {} failed, {} rejected, {} ignored",
        summary.requests,
        summary.completed,
        summary.failed,
        summary.rejected,
        summary.ignored
    );
    Ok(summary)
}

/// 以指定的值填入表單並送出一次，回傳產生的排程
///
/// 未知科目直接回報錯誤，不會送出請求。
pub async fn run_once<S, R>(
    controller: &mut FormController<S, R>,
    subject: Option<&str>,
    preparation_days: Option<&str>,
    target_score: Option<&str>,
) -> Result<Schedule>
where
    S: SchedulingService + 'static,
    R: Surface,
{
    if let Some(subject) = subject {
        if !controller.select_subject(subject) {
            return Err(unknown_subject(controller, subject));
        }
    }
    controller.set_preparation_days(preparation_days.unwrap_or_default());
    controller.set_target_score(target_score.unwrap_or_default());

    match controller.on_submit().await {
        SubmitOutcome::Rendered(schedule) => Ok(schedule),
        SubmitOutcome::Invalid(e) => Err(PlannerError::Validation(e)),
        SubmitOutcome::Failed(e) => Err(PlannerError::Service(e)),
        SubmitOutcome::Busy => Err(PlannerError::RequestInFlight),
    }
}

pub fn unknown_subject<S, R>(controller: &FormController<S, R>, subject: &str) -> PlannerError
where
    S: SchedulingService + 'static,
    R: Surface,
{
    PlannerError::UnknownSubject {
        subject: subject.to_string(),
        options: controller.settings().subjects.join(", "),
    }
}
