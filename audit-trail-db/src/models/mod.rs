pub mod audit;
pub mod creatable;
pub mod identifiable;
pub mod trackable;

// Re-exports
pub use audit::*;
pub use creatable::*;
pub use identifiable::*;
pub use trackable::*;
