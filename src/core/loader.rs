use crate::core::render::render;
use crate::domain::model::ServiceCatalog;
use crate::domain::ports::{CatalogSource, DisplaySurface};

/// Shown instead of the card list when the catalog cannot be loaded.
pub const LOAD_FAILURE_NOTICE: &str =
    "Please run on a local server to see data, or check the logs.";

/// Fetches the catalog and renders it in full. Failure is all-or-nothing:
/// any fetch, status, or parse problem is logged and replaced by a static
/// notice on the surface. Never propagates the error, never retries.
pub async fn load_and_render<C, S>(source: &C, surface: &mut S) -> Option<ServiceCatalog>
where
    C: CatalogSource + ?Sized,
    S: DisplaySurface,
{
    match source.fetch().await {
        Ok(catalog) => {
            tracing::info!("loaded {} services", catalog.len());
            render(catalog.records(), surface);
            Some(catalog)
        }
        Err(err) => {
            tracing::error!("failed to load service catalog: {}", err);
            surface.clear();
            surface.show_diagnostic(LOAD_FAILURE_NOTICE);
            None
        }
    }
}
