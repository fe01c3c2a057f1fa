//! Family Tree Core
//!
//! In-memory genealogy: people stored as ECS entities with symmetric kin
//! edges, a name-keyed registry on top, and population-wide statistics.

pub mod components;
pub mod config;
pub mod dates;
pub mod error;
pub mod graph;
pub mod queries;
pub mod registry;
pub mod seed;
pub mod statistics;

pub use components::PersonId;
pub use config::{NameMatch, RegistryConfig};
pub use error::{GenealogyError, Result};
pub use graph::FamilyGraph;
pub use queries::ImmediateFamily;
pub use registry::FamilyRegistry;
pub use seed::Dataset;
pub use statistics::BirthdayGroup;
