pub mod page_view_repository;
pub mod settings_repository;

pub use page_view_repository::*;
pub use settings_repository::*;
