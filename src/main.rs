use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use serde_json::json;

use feedback_survey::args::Cli;
use feedback_survey::config::Config;
use feedback_survey::feedback::{
    seed, FeedbackApi, FeedbackController, FeedbackService, FeedbackStore, Latency,
};
use feedback_survey::logging::init_tracing;
use feedback_survey::ui::app::App;
use feedback_survey::ui::events::EventHandler;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = Config::load_from(&cli.config_path())?;
    cli.apply(&mut config);
    config.validate()?;

    let records = seed::load(config.seed.path.as_deref())?;
    tracing::info!(records = records.len(), "Seed dataset loaded");
    let service = FeedbackService::new(
        FeedbackStore::with_records(records),
        Latency::from(&config.latency),
    );
    let api: Arc<dyn FeedbackApi> = Arc::new(service);
    let controller = Arc::new(FeedbackController::new(api));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    if cli.stats {
        return print_stats(&runtime, &controller);
    }

    let tick_rate = Duration::from_millis(config.survey.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let app = App::new(
        Arc::clone(&controller),
        runtime.handle().clone(),
        events.sender(),
        config.survey.clone(),
    );
    app.initialize();
    feedback_survey::ui::run(app, events, tick_rate)?;

    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}

fn print_stats(
    runtime: &tokio::runtime::Runtime,
    controller: &FeedbackController,
) -> anyhow::Result<()> {
    runtime.block_on(controller.initialize());
    if let Some(error) = controller.error() {
        bail!("failed to load feedback: {error}");
    }

    let snapshot = controller.snapshot();
    let report = json!({
        "count": snapshot.feedback.len(),
        "averages": controller.calculate_averages(),
        "nps": controller.nps_summary(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
