use catalog_store::lifecycle::tracing::setup_tracing;
use catalog_store::lifecycle::{CatalogConfig, CatalogSystem};
use catalog_store::loader::JsonFileLoader;
use catalog_store::model::ProductRecord;
use catalog_store::query::SortOrder;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = CatalogConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(source = %config.data_source, "Starting catalog");

    let (system, report) = CatalogSystem::start(config, &JsonFileLoader)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        loaded = report.loaded.len(),
        skipped = report.skipped.len(),
        "Initial load finished"
    );

    let queries = system.queries().map_err(|e| e.to_string())?.clone();

    let span = tracing::info_span!("catalog_tour");
    async {
        let categories = queries.get_all_categories().await?;
        info!(?categories, "Categories");

        for category in &categories {
            let products = queries.filter_by_category(category).await?;
            info!(%category, count = products.len(), "Category size");
        }

        for product in queries.top_rated(3).await? {
            let record = ProductRecord::from(&product);
            match serde_json::to_string(&record) {
                Ok(json) => info!(%json, "Top rated"),
                Err(e) => warn!(id = %product.id(), error = %e, "Could not serialize product"),
            }
        }

        if let Some(cheapest) = queries.sort_by_price(SortOrder::Ascending).await?.first() {
            info!(id = %cheapest.id(), price = cheapest.price(), "Cheapest");
        }

        match queries.filter_by_category("Desktops").await {
            Ok(products) => info!(count = products.len(), "Desktops"),
            Err(e) => warn!(error = %e, "Expected miss"),
        }
        Ok::<(), catalog_store::product_store::CatalogError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    drop(queries);
    system.shutdown().await
}
