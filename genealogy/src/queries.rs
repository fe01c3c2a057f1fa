//! Relationship queries - read-only walks over the family world
//!
//! Every query takes the world and a handle; an unknown handle yields an
//! empty result rather than an error.

pub mod family;
pub mod mortality;
pub mod relatives;

pub use family::{extended_family, immediate_family, ImmediateFamily};
pub use mortality::{age_at_death, is_alive};
pub use relatives::{children, cousins, grandchildren, parents, siblings, spouse};

use hecs::World;

use crate::components::{Person, PersonId};

pub fn name_of(world: &World, id: PersonId) -> Option<String> {
    world
        .get::<&Person>(id.entity())
        .ok()
        .map(|person| person.name.clone())
}

pub fn names_of(world: &World, ids: &[PersonId]) -> Vec<String> {
    ids.iter().filter_map(|id| name_of(world, *id)).collect()
}
