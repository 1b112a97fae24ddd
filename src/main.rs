use inventory_planner::gateway::GatewayConfig;
use inventory_planner::lifecycle::{setup_tracing, InventorySystem};
use inventory_planner::views::{format_currency, DashboardSummary};
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = GatewayConfig::from_env();
    let system = InventorySystem::new(&config)?;
    let client = system.client.clone();

    async {
        // Same order as the dashboard: suggestions first, materials alongside.
        let (suggestions, materials) =
            tokio::join!(client.fetch_suggestions(), client.fetch_materials());
        if let Err(e) = &suggestions {
            warn!(error = %e, "Could not load production suggestions");
        }
        if let Err(e) = &materials {
            warn!(error = %e, "Could not load raw materials");
        }
    }
    .instrument(info_span!("dashboard_load"))
    .await;

    let state = client.snapshot().await?;
    let summary = DashboardSummary::from_state(&state);
    info!(
        total_revenue = %format_currency(summary.total_revenue),
        total_products = summary.total_products,
        stock = summary.stock_notice().as_deref().unwrap_or("Estoque OK"),
        "Dashboard"
    );
    for suggestion in &summary.suggestions {
        info!(
            product = %suggestion.product_name,
            quantity = suggestion.quantity_to_produce,
            total = %format_currency(suggestion.total_value),
            "Suggestion"
        );
    }
    if let Some(error) = &state.error {
        warn!(%error, "Last operation failed");
    }

    drop(client);
    system.shutdown().await?;
    Ok(())
}
