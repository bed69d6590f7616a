pub mod actor;
pub mod context;
pub mod error;

pub use actor::*;
pub use context::*;
pub use error::*;
