//! Family circles around one person.

use hecs::World;
use indexmap::IndexSet;
use serde::Serialize;

use super::{children, cousins, name_of, names_of, parents, siblings, spouse};
use crate::components::PersonId;

/// Names of a person's parents, declared siblings, spouse and children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImmediateFamily {
    pub parents: Vec<String>,
    pub siblings: Vec<String>,
    pub spouse: Option<String>,
    pub children: Vec<String>,
}

impl ImmediateFamily {
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
            && self.siblings.is_empty()
            && self.spouse.is_none()
            && self.children.is_empty()
    }
}

pub fn immediate_family(world: &World, id: PersonId) -> ImmediateFamily {
    ImmediateFamily {
        parents: names_of(world, &parents(world, id)),
        siblings: names_of(world, &siblings(world, id)),
        spouse: spouse(world, id).and_then(|s| name_of(world, s)),
        children: names_of(world, &children(world, id)),
    }
}

/// Parents, the parents' declared siblings, and cousins, without the person
/// themself. Each relative appears once, in the order first reached.
pub fn extended_family(world: &World, id: PersonId) -> Vec<PersonId> {
    let mut circle: IndexSet<PersonId> = IndexSet::new();
    let parents = parents(world, id);

    circle.extend(parents.iter().copied());
    for parent in &parents {
        circle.extend(siblings(world, *parent));
    }
    circle.extend(cousins(world, id));

    circle.shift_remove(&id);
    circle.into_iter().collect()
}
