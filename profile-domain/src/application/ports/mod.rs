pub mod identity;
pub mod repository;

pub use identity::*;
pub use repository::*;
