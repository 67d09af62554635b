use crate::core::filter::filter_records;
use crate::core::loader::load_and_render;
use crate::core::render::render;
use crate::core::signup::{ModalState, SignupModal, SubmitOutcome, SUBMITTING_LABEL};
use crate::domain::model::{ServiceCatalog, ServiceRecord};
use crate::domain::ports::{CatalogSource, DisplaySurface};

/// Translates UI events into calls against the core contracts. Owns the
/// catalog (when the load succeeded), the surface, the currently visible
/// subsequence, and the peripheral toggles (nav menu, signup modal).
pub struct DirectorySession<S: DisplaySurface> {
    catalog: Option<ServiceCatalog>,
    visible: Vec<ServiceRecord>,
    surface: S,
    menu_expanded: bool,
    modal: SignupModal,
}

impl<S: DisplaySurface> DirectorySession<S> {
    /// Loads the catalog and renders it in full, or shows the load-failure
    /// notice. Either way the session starts; after a failed load, search
    /// input is ignored so the notice stays up.
    pub async fn start<C>(source: &C, mut surface: S, modal: SignupModal) -> Self
    where
        C: CatalogSource + ?Sized,
    {
        let catalog = load_and_render(source, &mut surface).await;
        let visible = catalog
            .as_ref()
            .map(|c| c.records().to_vec())
            .unwrap_or_default();

        Self {
            catalog,
            visible,
            surface,
            menu_expanded: false,
            modal,
        }
    }

    /// Recomputes the visible subsequence from the full catalog and
    /// re-renders. Called on every input change, no debounce.
    pub fn search(&mut self, query: &str) {
        let Some(catalog) = &self.catalog else {
            return;
        };
        tracing::debug!("search input: {:?}", query);
        self.visible = filter_records(catalog, query);
        render(&self.visible, &mut self.surface);
    }

    /// Activates the card at `index` among the currently visible cards and
    /// surfaces the acknowledgment. Placeholder interaction, not navigation.
    pub fn select(&mut self, index: usize) -> Option<String> {
        let record = self.visible.get(index)?;
        let ack = format!("You selected the {} service!", record.title);
        self.surface.announce(&ack);
        Some(ack)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_expanded = !self.menu_expanded;
        self.menu_expanded
    }

    pub fn menu_expanded(&self) -> bool {
        self.menu_expanded
    }

    pub async fn open_signup(&mut self) {
        self.modal.open().await;
    }

    pub async fn close_signup(&mut self) {
        self.modal.close().await;
    }

    pub async fn submit_signup(&mut self, email: &str) -> SubmitOutcome {
        let outcome = self.modal.submit(email).await;
        match outcome {
            SubmitOutcome::Rejected => {
                let error = self.modal.state().await.error_text;
                self.surface.announce(&error);
            }
            SubmitOutcome::Accepted => self.surface.announce(SUBMITTING_LABEL),
        }
        outcome
    }

    /// Delivers a deferred acknowledgment once its task has fired.
    pub fn announce(&mut self, message: &str) {
        self.surface.announce(message);
    }

    pub fn catalog(&self) -> Option<&ServiceCatalog> {
        self.catalog.as_ref()
    }

    pub fn visible(&self) -> &[ServiceRecord] {
        &self.visible
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub async fn modal_state(&self) -> ModalState {
        self.modal.state().await
    }

    pub fn signup_pending(&self) -> bool {
        self.modal.has_pending_ack()
    }
}
