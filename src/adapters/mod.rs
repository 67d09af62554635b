// Adapters layer: concrete implementations for external systems (http
// source, terminal surface).

pub mod http;
pub mod terminal;

pub use http::HttpCatalogSource;
pub use terminal::TerminalSurface;
