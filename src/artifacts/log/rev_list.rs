use crate::areas::history::History;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};
use derive_new::new;

/// Lazy walk from a starting commit back to the root, newest first
///
/// A parent link pointing at a missing commit yields a single `GraphIntegrity` error
/// and ends the walk.
#[derive(Clone, new)]
pub struct RevList<'r> {
    history: &'r History,
    current_commit_oid: Option<&'r ObjectId>,
}

impl<'r> Iterator for RevList<'r> {
    type Item = Result<&'r Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.history.get(commit_oid) {
            Some(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent();
                Some(Ok(commit))
            }
            None => {
                tracing::error!(oid = %commit_oid, "commit history is broken");
                Some(Err(RepositoryError::GraphIntegrity(commit_oid.clone())))
            }
        }
    }
}
