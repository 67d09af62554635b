use crate::domain::model::{CardView, ServiceCatalog};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the service catalog comes from. The single awaited operation of
/// the program; everything downstream of it is synchronous.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<ServiceCatalog>;
}

/// The surface cards are rendered onto. Implementations must tolerate
/// being cleared and repopulated on every search keystroke.
pub trait DisplaySurface {
    /// Drop everything currently displayed.
    fn clear(&mut self);

    /// Append one card after the current content.
    fn push_card(&mut self, card: &CardView);

    /// Show or hide the "no results" indicator.
    fn set_no_results(&mut self, visible: bool);

    /// Replace the card area with a static operator-facing notice.
    fn show_diagnostic(&mut self, message: &str);

    /// Surface a transient message (selection and signup acknowledgments).
    fn announce(&mut self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn ack_delay(&self) -> Duration;
}
