// ==========================================
// Система управления логистикой - workbench entry point
// ==========================================
// The presentation shell is external to this crate; this binary is
// a non-interactive workbench that loads the seed session and dumps
// the read models the shell would render.
// ==========================================

use logistics_board::app::AppState;
use logistics_board::config::BoardConfig;
use logistics_board::{logging, ApiResult, APP_NAME, VERSION};

fn main() {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", APP_NAME);
    tracing::info!("version: {}", VERSION);
    tracing::info!("==================================================");

    let config = BoardConfig::load();
    let state = AppState::new(config);

    if let Err(err) = run(&state) {
        tracing::error!(error = %err, "workbench run failed");
        std::process::exit(1);
    }
}

fn run(state: &AppState) -> ApiResult<()> {
    // Board summary per stage.
    let board = state.plan_api.get_board()?;
    for (stage_id, stage) in board.stages() {
        tracing::info!(stage = %stage_id, title = %stage_id.title(), rows = stage.len(), "stage loaded");
    }

    // Unified cross-stage view.
    let unified = state.plan_api.unified_rows()?;
    println!("unified rows: {}", serde_json::to_string_pretty(&unified).map_err(anyhow::Error::from)?);

    // Optimizer plan vs project plan, the default comparison pair.
    let report = state.plan_api.compare_stages("optimizerPlan", "projectPlan")?;
    println!(
        "comparison optimizerPlan/projectPlan: differences={}, matches={}",
        report.different_count, report.match_count
    );

    // Dashboard aggregates.
    let distribution = state.dashboard_api.status_distribution()?;
    println!("status distribution: {}", serde_json::to_string_pretty(&distribution).map_err(anyhow::Error::from)?);

    let breakdown = state.dashboard_api.stage_breakdown()?;
    println!("stage breakdown: {}", serde_json::to_string_pretty(&breakdown).map_err(anyhow::Error::from)?);

    let trend = state.dashboard_api.delivery_trend(7)?;
    println!("weekly trend: {}", serde_json::to_string_pretty(&trend).map_err(anyhow::Error::from)?);

    let routes = state.dashboard_api.list_routes(None);
    println!("routes: {}", serde_json::to_string_pretty(&routes).map_err(anyhow::Error::from)?);

    Ok(())
}
