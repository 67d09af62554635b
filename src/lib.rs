pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{HttpCatalogSource, TerminalSurface};
pub use crate::config::CliConfig;
pub use crate::core::session::DirectorySession;
pub use crate::core::signup::{SignupModal, SubmitOutcome};
pub use crate::domain::model::{CardView, ServiceCatalog, ServiceRecord};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, DisplaySurface};
pub use crate::utils::error::{DirectoryError, Result};
