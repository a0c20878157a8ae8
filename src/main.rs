use clap::Parser;
use std::sync::Arc;
use study_planner::app::session;
use study_planner::utils::{logger, validation::Validate};
use study_planner::{CliConfig, FormController, HttpSchedulingService, PlannerError, TerminalSurface};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting study-planner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    tracing::info!("📡 Scheduling service: {}", config.endpoint());

    let service = Arc::new(HttpSchedulingService::new(config.endpoint()));
    let surface = TerminalSurface::new(std::io::stdout());
    let mut controller = FormController::new(service, surface, config.form_settings());

    if cli.is_one_shot() {
        let result = session::run_once(
            &mut controller,
            cli.subject.as_deref(),
            cli.days.as_deref(),
            cli.score.as_deref(),
        )
        .await;

        if let Err(e) = result {
            tracing::error!("❌ Schedule generation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());

            // 輸入錯誤與服務錯誤使用不同的退出碼
            let exit_code = match e {
                PlannerError::Validation(_) | PlannerError::UnknownSubject { .. } => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
        return Ok(());
    }

    if let Some(subject) = cli.subject.as_deref() {
        if !controller.select_subject(subject) {
            eprintln!("⚠️ {}", session::unknown_subject(&controller, subject));
        }
    }

    eprint!("{}", session::HELP_TEXT);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stderr = std::io::stderr();
    session::run_session(&mut controller, stdin, &mut stderr).await?;

    Ok(())
}
