//! Commit object
//!
//! Commits are immutable snapshots of every tracked file at a point in time.
//! They contain:
//! - A message
//! - A timestamp (seconds since the Unix epoch)
//! - The parent commit ID (absent for the root commit)
//! - The complete filename to blob ID mapping, not only the files that changed
//!
//! ## Identity
//!
//! The commit ID is the digest of the canonical serialization:
//! ```text
//! <message><timestamp><parent-id or empty>(<filename><blob-id>)*
//! ```
//! with the tracked files visited in byte-wise filename order.

use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeMap;

/// Message of the commit created by `init`
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Filename to blob ID mapping, iterated in filename order
pub type TrackedFiles = BTreeMap<String, ObjectId>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// ID derived from the other fields at construction time
    oid: ObjectId,
    message: String,
    /// Seconds since the Unix epoch
    timestamp: i64,
    /// None for the root commit
    parent: Option<ObjectId>,
    /// Full snapshot of every file known at this commit
    tracked_files: TrackedFiles,
}

impl Commit {
    /// Create a new commit and derive its ID
    ///
    /// # Arguments
    ///
    /// * `message` - Commit message
    /// * `timestamp` - Creation time in seconds since the epoch
    /// * `parent` - Parent commit ID (None for the root commit)
    /// * `tracked_files` - Complete filename to blob ID snapshot
    pub fn new(
        message: String,
        timestamp: i64,
        parent: Option<ObjectId>,
        tracked_files: TrackedFiles,
    ) -> Self {
        let mut commit = Commit {
            oid: ObjectId::from_hash(0),
            message,
            timestamp,
            parent,
            tracked_files,
        };
        commit.oid = commit.object_id();

        commit
    }

    /// Create the root commit: no parent and no tracked files
    pub fn root(timestamp: i64) -> Self {
        Self::new(
            ROOT_COMMIT_MESSAGE.to_string(),
            timestamp,
            None,
            TrackedFiles::new(),
        )
    }

    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the first line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn tracked_files(&self) -> &TrackedFiles {
        &self.tracked_files
    }

    pub fn tracked_file(&self, name: &str) -> Option<&ObjectId> {
        self.tracked_files.get(name)
    }

    /// Check that re-deriving the ID from the stored fields reproduces the stored ID
    pub fn verify_id(&self) -> bool {
        self.object_id() == self.oid
    }

    /// Format the timestamp in local time
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000", or the raw seconds when out of range
    pub fn readable_timestamp(&self) -> String {
        match chrono::DateTime::from_timestamp(self.timestamp, 0) {
            Some(datetime) => datetime
                .with_timezone(&chrono::Local)
                .format("%a %b %-d %H:%M:%S %Y %z")
                .to_string(),
            None => self.timestamp.to_string(),
        }
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Bytes {
        let mut content = String::new();

        content.push_str(&self.message);
        content.push_str(&self.timestamp.to_string());
        if let Some(parent) = &self.parent {
            content.push_str(parent.as_ref());
        }
        for (name, oid) in &self.tracked_files {
            content.push_str(name);
            content.push_str(oid.as_ref());
        }

        Bytes::from(content)
    }
}

impl Object for Commit {
    fn display(&self) -> String {
        let mut lines = vec![];

        lines.push(format!("commit {}", self.oid));
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("timestamp {}", self.timestamp));
        for (name, oid) in &self.tracked_files {
            lines.push(format!("file {oid} {name}"));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
