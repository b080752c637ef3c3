pub mod analytics_producers;
pub mod analytics_service;
pub mod settings_store;

pub use analytics_producers::*;
pub use analytics_service::*;
pub use settings_store::*;
