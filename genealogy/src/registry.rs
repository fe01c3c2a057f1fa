//! Family Registry - name-keyed ownership of every person in the tree
//!
//! The registry is the entry point for callers that only know names. It owns
//! the [`FamilyGraph`] and keeps one person per exact name string.

use chrono::NaiveDate;
use indexmap::IndexMap;
use tracing::debug;

use crate::components::PersonId;
use crate::config::{NameMatch, RegistryConfig};
use crate::error::{GenealogyError, Result};
use crate::graph::FamilyGraph;
use crate::queries::ImmediateFamily;

pub struct FamilyRegistry {
    graph: FamilyGraph,
    /// Registration order is preserved; listings and aggregates follow it.
    index: IndexMap<String, PersonId>,
    config: RegistryConfig,
}

impl FamilyRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            graph: FamilyGraph::new(),
            index: IndexMap::new(),
            config,
        }
    }

    pub fn graph(&self) -> &FamilyGraph {
        &self.graph
    }

    /// Edit edges by handle. People themselves can only be added through
    /// [`FamilyRegistry::get_or_create`].
    pub fn graph_mut(&mut self) -> &mut FamilyGraph {
        &mut self.graph
    }

    /// Return the person registered under `name`, creating them if needed.
    ///
    /// The first registration wins: dates passed for an existing name are
    /// ignored.
    pub fn get_or_create(
        &mut self,
        name: &str,
        birth: Option<NaiveDate>,
        death: Option<NaiveDate>,
    ) -> PersonId {
        if let Some(&id) = self.index.get(name) {
            if birth.is_some_and(|b| self.graph.birth_date(id) != Some(b))
                || death.is_some_and(|d| self.graph.death_date(id) != Some(d))
            {
                debug!(name, ?birth, ?death, "already registered, ignoring new dates");
            }
            return id;
        }

        let id = self.graph.spawn_person(name, birth, death);
        self.index.insert(name.to_string(), id);
        id
    }

    /// Look a person up by name under the configured [`NameMatch`] policy.
    pub fn find(&self, name: &str) -> Option<PersonId> {
        match self.config.name_match {
            NameMatch::Exact => self.index.get(name).copied(),
            policy => self
                .index
                .iter()
                .find(|(registered, _)| policy.matches(registered, name))
                .map(|(_, id)| *id),
        }
    }

    fn require(&self, name: &str) -> Result<PersonId> {
        self.find(name)
            .ok_or_else(|| GenealogyError::UnknownName(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.index.keys().map(String::as_str)
    }

    pub(crate) fn people(&self) -> impl Iterator<Item = (&str, PersonId)> + '_ {
        self.index.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ------------------------------------------------------------------------
    // Relationship edits by name
    // ------------------------------------------------------------------------

    pub fn add_child(&mut self, parent: &str, child: &str) -> Result<()> {
        let (parent, child) = (self.require(parent)?, self.require(child)?);
        self.graph.add_child(parent, child)
    }

    pub fn add_sibling(&mut self, a: &str, b: &str) -> Result<()> {
        let (a, b) = (self.require(a)?, self.require(b)?);
        self.graph.add_sibling(a, b)
    }

    pub fn set_spouse(&mut self, a: &str, b: &str) -> Result<()> {
        let (a, b) = (self.require(a)?, self.require(b)?);
        self.graph.set_spouse(a, b)
    }

    // ------------------------------------------------------------------------
    // Relationship queries by name
    //
    // An unknown name yields an empty list or `None`.
    // ------------------------------------------------------------------------

    fn names_via(
        &self,
        name: &str,
        walk: impl FnOnce(&FamilyGraph, PersonId) -> Vec<PersonId>,
    ) -> Vec<String> {
        match self.find(name) {
            Some(id) => self.graph.names_of(&walk(&self.graph, id)),
            None => Vec::new(),
        }
    }

    pub fn parents_of(&self, name: &str) -> Vec<String> {
        self.names_via(name, FamilyGraph::parents)
    }

    pub fn children_of(&self, name: &str) -> Vec<String> {
        self.names_via(name, FamilyGraph::children)
    }

    pub fn siblings_of(&self, name: &str) -> Vec<String> {
        self.names_via(name, FamilyGraph::siblings)
    }

    pub fn cousins_of(&self, name: &str) -> Vec<String> {
        self.names_via(name, FamilyGraph::cousins)
    }

    pub fn grandchildren_of(&self, name: &str) -> Vec<String> {
        self.names_via(name, FamilyGraph::grandchildren)
    }

    pub fn extended_family_of(&self, name: &str) -> Vec<String> {
        self.names_via(name, FamilyGraph::extended_family)
    }

    pub fn spouse_of(&self, name: &str) -> Option<String> {
        let id = self.find(name)?;
        self.graph.spouse(id).and_then(|spouse| self.graph.name(spouse))
    }

    pub fn immediate_family_of(&self, name: &str) -> Option<ImmediateFamily> {
        self.find(name).map(|id| self.graph.immediate_family(id))
    }

    pub fn age_at_death_of(&self, name: &str) -> Option<i32> {
        self.find(name).and_then(|id| self.graph.age_at_death(id))
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
