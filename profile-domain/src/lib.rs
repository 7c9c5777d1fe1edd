/*!
# Profile Domain

Shared domain layer for the profile-registration service, using hexagonal
architecture principles.

This crate provides:
- Domain models for profiles and registration input
- Port definitions for the identity provider and the profile store
- The application service implementing the registration use case
- Infrastructure adapters for Keycloak (reqwest) and MongoDB

## Architecture

```text
┌─────────────────────────────────────────────────────────────┐
│                    Primary Adapters                         │
│                   (Axum HTTP handlers)                      │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                  Application Layer                          │
│  • ProfileService (registration + listing)                  │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                  Domain Layer (Ports)                       │
│  • IdentityProvider          • ProfileRepository            │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│             Infrastructure Layer (Adapters)                 │
│  • KeycloakIdentityProvider  • MongoProfileRepository       │
└─────────────────────────────────────────────────────────────┘
```
*/

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use domain::entities::*;
pub use domain::errors::*;
pub use domain::normalize::*;
