//src/main.rs

use care_console::config::AppState;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs vão para o stderr; o stdout fica só com o JSON do painel.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let mut app_state = AppState::new()?;

    let snapshot = app_state
        .dashboard_service
        .snapshot(&app_state.collections);

    tracing::info!(
        residents = snapshot.counts.residents,
        invoices = snapshot.counts.invoices,
        "🚀 Painel calculado"
    );
    println!("{}", serde_json::to_string_pretty(snapshot)?);
    Ok(())
}
