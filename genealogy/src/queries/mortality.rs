//! Mortality - age at death from recorded life events

use hecs::World;

use crate::components::{BirthDate, DeathDate, PersonId};
use crate::dates;

/// Exact age in completed years at the recorded death.
///
/// `None` when either the death date or the birth date is missing.
pub fn age_at_death(world: &World, id: PersonId) -> Option<i32> {
    let death = world.get::<&DeathDate>(id.entity()).ok()?.0;
    let birth = world.get::<&BirthDate>(id.entity()).ok()?.0;
    Some(dates::age_on(birth, death))
}

/// No death date recorded.
pub fn is_alive(world: &World, id: PersonId) -> bool {
    world.contains(id.entity()) && world.get::<&DeathDate>(id.entity()).is_err()
}
