//! Per-request index of legal-entity membership edges.

use std::collections::{HashMap, HashSet};

use super::types::Organization;

/// Identity-indexed membership edges, looked up in both directions.
///
/// Built fresh for every request from the organizations fetched for it.
#[derive(Debug, Clone, Default)]
pub struct MembershipIndex {
    parents: HashMap<String, HashSet<String>>,
    children: HashMap<String, HashSet<String>>,
}

impl MembershipIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from every edge carried by `organizations`.
    #[must_use]
    pub fn from_organizations<'a, I>(organizations: I) -> Self
    where
        I: IntoIterator<Item = &'a Organization>,
    {
        let mut index = Self::new();
        for organization in organizations {
            index.add_organization(organization);
        }
        index
    }

    /// Adds the membership and operated-unit edges of one organization.
    pub fn add_organization(&mut self, organization: &Organization) {
        let id = organization.org_number.as_str();

        for membership in organization.memberships() {
            self.add_edge(id, membership.legal_entity.as_str());
        }
        for operated in organization.operated_units() {
            self.add_edge(operated.unit.as_str(), id);
        }
    }

    /// Records that `member` belongs to `legal_entity`.
    pub fn add_edge(&mut self, member: &str, legal_entity: &str) {
        self.parents
            .entry(member.to_string())
            .or_default()
            .insert(legal_entity.to_string());
        self.children
            .entry(legal_entity.to_string())
            .or_default()
            .insert(member.to_string());
    }

    /// Legal entities `id` belongs to.
    pub fn parents_of(&self, id: &str) -> impl Iterator<Item = &str> {
        self.parents.get(id).into_iter().flatten().map(String::as_str)
    }

    /// Members that belong to `id`.
    pub fn children_of(&self, id: &str) -> impl Iterator<Item = &str> {
        self.children.get(id).into_iter().flatten().map(String::as_str)
    }

    /// `id` itself plus every identity linked to it by a direct edge.
    #[must_use]
    pub fn affiliated<'a>(&'a self, id: &'a str) -> HashSet<&'a str> {
        let mut set: HashSet<&str> = HashSet::new();
        set.insert(id);
        set.extend(self.parents_of(id));
        set.extend(self.children_of(id));
        set
    }

    /// Number of distinct member identities with at least one edge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if no edges are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
