pub mod models;
pub mod repository;
pub mod store;
pub mod tracker;

pub use models::*;
pub use repository::*;
pub use store::*;
pub use tracker::*;
