pub mod keycloak_identity;
pub mod mongo_repository;

pub use keycloak_identity::*;
pub use mongo_repository::*;
