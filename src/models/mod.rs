// Re-export all models organized by domain
pub mod analytics;
pub mod errors;
pub mod page_view;
pub mod response;
pub mod settings;

pub use analytics::*;
pub use errors::*;
pub use page_view::*;
pub use response::*;
pub use settings::*;
