//! ECS Components for family tree entities
//!
//! Every individual is one entity. Relationship edges live on both endpoints;
//! only `FamilyGraph` writes them, so the two sides never drift apart.

use chrono::NaiveDate;
use hecs::Entity;

// ============================================================================
// Identity Components
// ============================================================================

/// Handle to one individual in a `FamilyGraph`.
///
/// Handles are only minted by the graph that owns the person and stay valid
/// for the lifetime of that graph (people are never removed). A handle
/// carries the id of its graph, so another graph rejects it even when the
/// entity slot happens to be live there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId {
    graph: u64,
    entity: Entity,
}

impl PersonId {
    pub(crate) fn new(graph: u64, entity: Entity) -> Self {
        Self { graph, entity }
    }

    pub(crate) fn graph(self) -> u64 {
        self.graph
    }

    pub(crate) fn entity(self) -> Entity {
        self.entity
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

// ============================================================================
// Life Events
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(pub NaiveDate);

/// Marker of a recorded death. Absence means alive (or unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathDate(pub NaiveDate);

// ============================================================================
// Relationship Components
// ============================================================================

/// Directed and symmetric kin edges, in insertion order, without duplicates.
#[derive(Debug, Clone, Default)]
pub struct Kinship {
    pub parents: Vec<PersonId>,
    pub children: Vec<PersonId>,
    pub siblings: Vec<PersonId>,
}

impl Kinship {
    /// Push `id` onto `list` unless already present. Returns whether it was added.
    pub(crate) fn link(list: &mut Vec<PersonId>, id: PersonId) -> bool {
        if list.contains(&id) {
            false
        } else {
            list.push(id);
            true
        }
    }
}

/// Present only on married people; points at the partner entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spouse(pub PersonId);
