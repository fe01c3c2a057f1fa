//! Family Graph - owns every person and keeps relationship edges symmetric

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use hecs::{EntityBuilder, World};
use tracing::{debug, trace};

use crate::components::*;
use crate::error::{GenealogyError, Result};
use crate::queries::{self, ImmediateFamily};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

pub struct FamilyGraph {
    pub(crate) world: World,
    /// Stamped into every handle this graph mints.
    id: u64,
}

impl FamilyGraph {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Create a new individual. Names are not checked for uniqueness here;
    /// only the registry calls this, and it owns that rule.
    pub(crate) fn spawn_person(
        &mut self,
        name: &str,
        birth: Option<NaiveDate>,
        death: Option<NaiveDate>,
    ) -> PersonId {
        let entity = self.world.reserve_entity();
        let id = PersonId::new(self.id, entity);

        let mut builder = EntityBuilder::new();
        builder.add(Person {
            id,
            name: name.to_string(),
        });
        builder.add(Kinship::default());
        if let Some(date) = birth {
            builder.add(BirthDate(date));
        }
        if let Some(date) = death {
            builder.add(DeathDate(date));
        }
        self.world.spawn_at(entity, builder.build());

        debug!(name, ?birth, ?death, "person created");
        id
    }

    // ------------------------------------------------------------------------
    // Mutations
    //
    // Each one checks every handle it touches before writing anything, so a
    // failure never leaves a one-sided edge behind.
    // ------------------------------------------------------------------------

    /// Record `child` as a child of `parent` (and `parent` as a parent of `child`).
    pub fn add_child(&mut self, parent: PersonId, child: PersonId) -> Result<()> {
        self.ensure(parent)?;
        self.ensure(child)?;

        let down = Kinship::link(&mut self.kinship_mut(parent)?.children, child);
        let up = Kinship::link(&mut self.kinship_mut(child)?.parents, parent);

        if down || up {
            debug!(parent = ?self.name(parent), child = ?self.name(child), "parent/child linked");
        } else {
            trace!(?parent, ?child, "parent/child already linked");
        }
        Ok(())
    }

    /// Inverse spelling of [`FamilyGraph::add_child`]; both create the same pair.
    pub fn add_parent(&mut self, child: PersonId, parent: PersonId) -> Result<()> {
        self.add_child(parent, child)
    }

    pub fn add_sibling(&mut self, a: PersonId, b: PersonId) -> Result<()> {
        self.ensure(a)?;
        self.ensure(b)?;

        let forward = Kinship::link(&mut self.kinship_mut(a)?.siblings, b);
        let backward = Kinship::link(&mut self.kinship_mut(b)?.siblings, a);

        if forward || backward {
            debug!(a = ?self.name(a), b = ?self.name(b), "siblings linked");
        } else {
            trace!(?a, ?b, "siblings already linked");
        }
        Ok(())
    }

    /// Marry `a` and `b`. Any previous spouse of either side keeps pointing
    /// at them until it is itself re-married.
    pub fn set_spouse(&mut self, a: PersonId, b: PersonId) -> Result<()> {
        self.ensure(a)?;
        self.ensure(b)?;

        self.world
            .insert_one(a.entity(), Spouse(b))
            .map_err(|_| GenealogyError::UnknownPerson(a))?;
        self.world
            .insert_one(b.entity(), Spouse(a))
            .map_err(|_| GenealogyError::UnknownPerson(b))?;

        debug!(a = ?self.name(a), b = ?self.name(b), "spouses set");
        Ok(())
    }

    fn owns(&self, id: PersonId) -> bool {
        id.graph() == self.id
    }

    fn ensure(&self, id: PersonId) -> Result<()> {
        if self.owns(id) && self.world.get::<&Kinship>(id.entity()).is_ok() {
            Ok(())
        } else {
            Err(GenealogyError::UnknownPerson(id))
        }
    }

    fn kinship_mut(&mut self, id: PersonId) -> Result<&mut Kinship> {
        self.world
            .query_one_mut::<&mut Kinship>(id.entity())
            .map_err(|_| GenealogyError::UnknownPerson(id))
    }

    /// Run a read-only query for a handle minted here; foreign handles get
    /// the empty answer.
    fn read<T: Default>(&self, id: PersonId, query: impl FnOnce(&World, PersonId) -> T) -> T {
        if self.owns(id) {
            query(&self.world, id)
        } else {
            T::default()
        }
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    pub fn name(&self, id: PersonId) -> Option<String> {
        self.read(id, queries::name_of)
    }

    pub fn birth_date(&self, id: PersonId) -> Option<NaiveDate> {
        self.read(id, |world, id| {
            world.get::<&BirthDate>(id.entity()).ok().map(|b| b.0)
        })
    }

    pub fn death_date(&self, id: PersonId) -> Option<NaiveDate> {
        self.read(id, |world, id| {
            world.get::<&DeathDate>(id.entity()).ok().map(|d| d.0)
        })
    }

    pub fn is_alive(&self, id: PersonId) -> bool {
        self.read(id, queries::is_alive)
    }

    /// Number of people in the graph.
    pub fn len(&self) -> usize {
        self.world.query::<&Person>().iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------------
    // Relationship queries
    // ------------------------------------------------------------------------

    pub fn parents(&self, id: PersonId) -> Vec<PersonId> {
        self.read(id, queries::parents)
    }

    pub fn children(&self, id: PersonId) -> Vec<PersonId> {
        self.read(id, queries::children)
    }

    /// Declared siblings only; a shared parent does not make two people siblings.
    pub fn siblings(&self, id: PersonId) -> Vec<PersonId> {
        self.read(id, queries::siblings)
    }

    pub fn spouse(&self, id: PersonId) -> Option<PersonId> {
        self.read(id, queries::spouse)
    }

    pub fn cousins(&self, id: PersonId) -> Vec<PersonId> {
        self.read(id, queries::cousins)
    }

    pub fn grandchildren(&self, id: PersonId) -> Vec<PersonId> {
        self.read(id, queries::grandchildren)
    }

    pub fn age_at_death(&self, id: PersonId) -> Option<i32> {
        self.read(id, queries::age_at_death)
    }

    pub fn immediate_family(&self, id: PersonId) -> ImmediateFamily {
        self.read(id, queries::immediate_family)
    }

    pub fn extended_family(&self, id: PersonId) -> Vec<PersonId> {
        self.read(id, queries::extended_family)
    }

    /// Resolve handles to names, skipping any that are not in this graph.
    pub fn names_of(&self, ids: &[PersonId]) -> Vec<String> {
        ids.iter().filter_map(|&id| self.name(id)).collect()
    }
}

impl Default for FamilyGraph {
    fn default() -> Self {
        Self::new()
    }
}
