use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};
use std::collections::HashMap;

/// Commit graph
///
/// Owns every commit ever created, keyed by commit ID. Each commit links to at most
/// one parent, so the graph is a single chain back to the root per commit.
#[derive(Debug, Default)]
pub struct History {
    commits: HashMap<ObjectId, Commit>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a commit keyed by its ID
    ///
    /// Re-inserting an existing ID keeps the stored commit. A commit whose parent is not
    /// part of the graph is rejected so the graph stays connected to its root.
    pub fn insert(&mut self, commit: Commit) -> Result<ObjectId> {
        if let Some(parent) = commit.parent()
            && !self.commits.contains_key(parent)
        {
            tracing::error!(parent = %parent, "refusing commit with unknown parent");
            return Err(RepositoryError::GraphIntegrity(parent.clone()));
        }

        let oid = commit.oid().clone();
        self.commits.entry(oid.clone()).or_insert(commit);

        Ok(oid)
    }

    pub fn get(&self, oid: &ObjectId) -> Option<&Commit> {
        self.commits.get(oid)
    }

    /// Look up a commit that some reference promises to exist
    pub fn load(&self, oid: &ObjectId) -> Result<&Commit> {
        self.get(oid).ok_or_else(|| {
            tracing::error!(oid = %oid, "referenced commit is missing");
            RepositoryError::GraphIntegrity(oid.clone())
        })
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.commits.contains_key(oid)
    }

    /// Find the stored commit IDs starting with the given prefix
    ///
    /// # Returns
    ///
    /// All matches in ascending order. An empty prefix matches every commit.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<ObjectId> {
        let mut matches = self
            .commits
            .keys()
            .filter(|oid| oid.starts_with(prefix))
            .cloned()
            .collect::<Vec<_>>();
        matches.sort();

        matches
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }
}
