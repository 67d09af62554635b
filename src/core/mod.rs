pub mod filter;
pub mod loader;
pub mod render;
pub mod session;
pub mod signup;

pub use crate::domain::model::{CardView, ServiceCatalog, ServiceRecord};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, DisplaySurface};
pub use crate::utils::error::Result;
