//! Direct and derived relatives: parents, children, siblings, cousins, grandchildren.

use hecs::World;

use crate::components::{Kinship, PersonId, Spouse};

fn with_kinship(
    world: &World,
    id: PersonId,
    pick: impl FnOnce(&Kinship) -> &Vec<PersonId>,
) -> Vec<PersonId> {
    world
        .get::<&Kinship>(id.entity())
        .map(|kinship| pick(&*kinship).clone())
        .unwrap_or_default()
}

pub fn parents(world: &World, id: PersonId) -> Vec<PersonId> {
    with_kinship(world, id, |k| &k.parents)
}

pub fn children(world: &World, id: PersonId) -> Vec<PersonId> {
    with_kinship(world, id, |k| &k.children)
}

pub fn siblings(world: &World, id: PersonId) -> Vec<PersonId> {
    with_kinship(world, id, |k| &k.siblings)
}

pub fn spouse(world: &World, id: PersonId) -> Option<PersonId> {
    world.get::<&Spouse>(id.entity()).ok().map(|spouse| spouse.0)
}

/// Children of every declared sibling of every parent.
///
/// Not deduplicated: a double cousin, or an aunt reachable through both
/// parents, shows up once per path.
pub fn cousins(world: &World, id: PersonId) -> Vec<PersonId> {
    let mut cousins = Vec::new();
    for parent in parents(world, id) {
        for aunt_or_uncle in siblings(world, parent) {
            cousins.extend(children(world, aunt_or_uncle));
        }
    }
    cousins
}

/// Children of children, one entry per path (not deduplicated).
pub fn grandchildren(world: &World, id: PersonId) -> Vec<PersonId> {
    children(world, id)
        .into_iter()
        .flat_map(|child| children(world, child))
        .collect()
}
