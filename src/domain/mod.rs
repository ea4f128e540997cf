//! Domain layer for Hexguard
//!
//! CDD Principle: Domain Model - Pure business logic for architecture rule checking
//! - Contains the layer roles, violation entities, and evaluation result aggregate
//! - Independent of infrastructure concerns like file systems or external APIs
//! - Expresses the ubiquitous language of hexagonal layering and dependency direction

pub mod roles;
pub mod violations;

// Re-export main domain types for convenience
pub use roles::LayerRole;
pub use violations::*;
