//! Folio - a minimal flat-file wiki server
//!
//! Pages are plain `<title>.txt` files served and edited over three HTTP
//! routes: `/view/:title`, `/edit/:title` and `/save/:title`.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod templates;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use handlers::router;
pub use logger::Logger;
pub use services::PageStore;
pub use templates::Templates;
pub use types::{AppState, Page};
pub use utils::{escape_attr, escape_html, is_valid_title, last_modified_html};
