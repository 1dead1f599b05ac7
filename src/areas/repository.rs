use crate::areas::database::Database;
use crate::areas::history::History;
use crate::areas::index::Index;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::revision::Revision;
use crate::artifacts::status::RepositoryState;
use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use derive_new::new;

/// Source of commit timestamps, in seconds since the Unix epoch
pub type Clock = Box<dyn Fn() -> i64>;

pub fn system_clock() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Result of `init`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// A root commit was created and HEAD points at it
    Initialized(ObjectId),
    /// The repository was already initialized; nothing changed
    AlreadyInitialized(ObjectId),
}

impl InitOutcome {
    pub fn head(&self) -> &ObjectId {
        match self {
            InitOutcome::Initialized(oid) | InitOutcome::AlreadyInitialized(oid) => oid,
        }
    }
}

/// Result of `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The content differs from HEAD and is now pending
    Staged,
    /// The content matches HEAD again, so the pending change was dropped
    Unstaged,
    /// Nothing changed
    NoOp,
}

/// Result of `checkout`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Checkout {
    /// Full ID HEAD now points at
    pub target: ObjectId,
    /// Number of staged entries thrown away
    pub discarded: usize,
}

/// Repository controller
///
/// Owns the object store, the staging area, the commit graph and HEAD. Every
/// operation checks its preconditions before touching any of them, so a failed
/// call leaves the repository exactly as it was.
pub struct Repository {
    database: Database,
    index: Index,
    history: History,
    /// None until `init` has run
    head: Option<ObjectId>,
    clock: Clock,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository {
    /// Create an uninitialized repository stamping commits with the system time
    pub fn new() -> Self {
        Self::with_clock(Box::new(system_clock))
    }

    /// Create an uninitialized repository with a custom timestamp source
    pub fn with_clock(clock: Clock) -> Self {
        Repository {
            database: Database::new(),
            index: Index::new(),
            history: History::new(),
            head: None,
            clock,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_initialized(&self) -> bool {
        self.head.is_some()
    }

    /// Commit ID HEAD points at
    pub fn head(&self) -> Result<&ObjectId> {
        self.head.as_ref().ok_or(RepositoryError::Uninitialized)
    }

    pub fn head_commit(&self) -> Result<&Commit> {
        self.history.load(self.head()?)
    }

    /// Create the root commit and point HEAD at it
    ///
    /// Calling it again is a no-op that reports the current HEAD.
    pub fn init(&mut self) -> Result<InitOutcome> {
        if let Some(head) = &self.head {
            return Ok(InitOutcome::AlreadyInitialized(head.clone()));
        }

        let root = Commit::root((self.clock)());
        let root_oid = self.history.insert(root)?;
        tracing::info!(oid = %root_oid, "initialized repository");
        self.head = Some(root_oid.clone());

        Ok(InitOutcome::Initialized(root_oid))
    }

    /// Stage the given content for a filename
    ///
    /// The content is always written to the object store. Content identical to the
    /// HEAD version cancels a pending change for that file instead of staging it.
    pub fn add(&mut self, name: &str, content: impl Into<Bytes>) -> Result<AddOutcome> {
        let head = self.head.as_ref().ok_or(RepositoryError::Uninitialized)?;
        let head_commit = self.history.load(head)?;

        let content_oid = self.database.put(content);
        let identical_to_head = head_commit.tracked_file(name) == Some(&content_oid);

        if identical_to_head {
            if self.index.unset(name) {
                tracing::debug!(file = name, "content matches HEAD, unstaged");
                return Ok(AddOutcome::Unstaged);
            }

            return Ok(AddOutcome::NoOp);
        }

        if self.index.entry_by_name(name) == Some(&content_oid) {
            return Ok(AddOutcome::NoOp);
        }

        self.index.set(name, content_oid);
        Ok(AddOutcome::Staged)
    }

    /// Record the staged changes on top of HEAD and advance HEAD to the new commit
    pub fn commit(&mut self, message: &str) -> Result<ObjectId> {
        let head = self.head.as_ref().ok_or(RepositoryError::Uninitialized)?;
        if self.index.is_empty() {
            return Err(RepositoryError::NothingToCommit);
        }
        let parent = self.history.load(head)?;

        let mut tracked_files = parent.tracked_files().clone();
        tracked_files.extend(
            self.index
                .entries()
                .map(|(name, oid)| (name.clone(), oid.clone())),
        );

        let commit = Commit::new(
            message.to_string(),
            (self.clock)(),
            Some(parent.oid().clone()),
            tracked_files,
        );
        let commit_oid = self.history.insert(commit)?;
        tracing::info!(oid = %commit_oid, files = self.index.len(), "created commit");

        self.head = Some(commit_oid.clone());
        self.index.clear();

        Ok(commit_oid)
    }

    /// Walk the history from HEAD back to the root commit
    ///
    /// Each call starts a fresh walk from the current HEAD.
    pub fn log(&self) -> Result<RevList<'_>> {
        Ok(RevList::new(&self.history, Some(self.head()?)))
    }

    /// Move HEAD to the commit named by a full ID, an unambiguous prefix or a
    /// relative revision such as `HEAD~2`
    ///
    /// Staged changes are discarded when HEAD moves.
    pub fn checkout(&mut self, revision: &str) -> Result<Checkout> {
        let head = self.head()?;
        let target = Revision::parse(revision).resolve(&self.history, head)?;
        // HEAD must never dangle
        self.history.load(&target)?;

        tracing::info!(oid = %target, "moving HEAD");
        self.head = Some(target.clone());
        let discarded = self.index.clear();
        if discarded > 0 {
            tracing::warn!(discarded, "staging area cleared by checkout");
        }

        Ok(Checkout::new(target, discarded))
    }

    /// Snapshot of HEAD, its tracked files and the staged changes
    pub fn current_state(&self) -> Result<RepositoryState> {
        let head_commit = self.head_commit()?;

        Ok(RepositoryState::new(
            head_commit.oid().clone(),
            head_commit.tracked_files().clone(),
            self.index.snapshot(),
        ))
    }

    /// Read the content of a blob
    pub fn read_blob(&self, oid: &ObjectId) -> Result<Bytes> {
        self.database.load(oid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::commit::TrackedFiles;
    use crate::artifacts::objects::digest::digest;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};
    use std::cell::Cell;
    use std::rc::Rc;

    const EPOCH: i64 = 1_700_000_000;

    /// Clock advancing one second per reading
    fn ticking_clock() -> Clock {
        let now = Rc::new(Cell::new(EPOCH));
        Box::new(move || {
            let timestamp = now.get();
            now.set(timestamp + 1);
            timestamp
        })
    }

    #[fixture]
    fn repository() -> Repository {
        let mut repository = Repository::with_clock(ticking_clock());
        repository.init().unwrap();
        repository
    }

    fn log_oids(repository: &Repository) -> Vec<ObjectId> {
        repository
            .log()
            .unwrap()
            .map(|commit| commit.map(|commit| commit.oid().clone()))
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_operations_require_initialization() {
        let mut repository = Repository::with_clock(ticking_clock());

        pretty_assertions::assert_eq!(
            repository.add("a.txt", "x"),
            Err(RepositoryError::Uninitialized)
        );
        pretty_assertions::assert_eq!(repository.commit("m1"), Err(RepositoryError::Uninitialized));
        pretty_assertions::assert_eq!(
            repository.checkout("abc"),
            Err(RepositoryError::Uninitialized)
        );
        assert!(matches!(repository.log(), Err(RepositoryError::Uninitialized)));
        pretty_assertions::assert_eq!(
            repository.current_state(),
            Err(RepositoryError::Uninitialized)
        );
        assert!(repository.database().is_empty());
        assert!(repository.index().is_empty());
    }

    #[test]
    fn test_init_creates_root_commit() {
        let mut repository = Repository::with_clock(ticking_clock());

        let outcome = repository.init().unwrap();

        let root = Commit::root(EPOCH);
        pretty_assertions::assert_eq!(outcome, InitOutcome::Initialized(root.oid().clone()));
        pretty_assertions::assert_eq!(repository.head().unwrap(), root.oid());
        assert!(repository.head_commit().unwrap().is_root());
    }

    #[rstest]
    fn test_repeated_init_changes_nothing(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();
        let c1 = repository.commit("m1").unwrap();

        let outcome = repository.init().unwrap();

        pretty_assertions::assert_eq!(outcome, InitOutcome::AlreadyInitialized(c1.clone()));
        pretty_assertions::assert_eq!(repository.head().unwrap(), &c1);
        pretty_assertions::assert_eq!(repository.history().len(), 2);
    }

    #[rstest]
    fn test_add_stores_blob_and_stages_file(mut repository: Repository) {
        pretty_assertions::assert_eq!(repository.add("a.txt", "x").unwrap(), AddOutcome::Staged);

        pretty_assertions::assert_eq!(repository.read_blob(&digest(b"x")).unwrap(), Bytes::from("x"));
        pretty_assertions::assert_eq!(repository.index().entry_by_name("a.txt"), Some(&digest(b"x")));
    }

    #[rstest]
    fn test_add_identical_staged_content_is_noop(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();

        pretty_assertions::assert_eq!(repository.add("a.txt", "x").unwrap(), AddOutcome::NoOp);
        pretty_assertions::assert_eq!(repository.index().len(), 1);
        pretty_assertions::assert_eq!(repository.database().len(), 1);
    }

    #[rstest]
    fn test_add_head_content_unstages_pending_change(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();
        repository.commit("m1").unwrap();
        repository.add("a.txt", "y").unwrap();

        pretty_assertions::assert_eq!(repository.add("a.txt", "x").unwrap(), AddOutcome::Unstaged);
        assert!(repository.index().is_empty());
        pretty_assertions::assert_eq!(repository.add("a.txt", "x").unwrap(), AddOutcome::NoOp);
    }

    #[rstest]
    fn test_commit_with_empty_staging_is_rejected(mut repository: Repository) {
        let head = repository.head().unwrap().clone();

        pretty_assertions::assert_eq!(repository.commit("m1"), Err(RepositoryError::NothingToCommit));
        pretty_assertions::assert_eq!(repository.head().unwrap(), &head);
        pretty_assertions::assert_eq!(repository.history().len(), 1);
    }

    #[rstest]
    fn test_commit_overlays_staged_files_onto_parent(mut repository: Repository) {
        repository.add("a.txt", "one").unwrap();
        repository.add("b.txt", "two").unwrap();
        let c1 = repository.commit("m1").unwrap();

        repository.add("b.txt", "changed").unwrap();
        repository.add("c.txt", "three").unwrap();
        let c2 = repository.commit("m2").unwrap();

        let commit = repository.head_commit().unwrap();
        pretty_assertions::assert_eq!(commit.oid(), &c2);
        pretty_assertions::assert_eq!(commit.parent(), Some(&c1));
        pretty_assertions::assert_eq!(
            commit.tracked_files(),
            &TrackedFiles::from([
                ("a.txt".to_string(), digest(b"one")),
                ("b.txt".to_string(), digest(b"changed")),
                ("c.txt".to_string(), digest(b"three")),
            ])
        );
        assert!(repository.index().is_empty());
    }

    #[rstest]
    fn test_last_staged_content_wins(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();
        repository.add("a.txt", "y").unwrap();
        repository.commit("m1").unwrap();

        let commit = repository.head_commit().unwrap();
        pretty_assertions::assert_eq!(commit.tracked_file("a.txt"), Some(&digest(b"y")));
        pretty_assertions::assert_eq!(commit.tracked_files().len(), 1);
    }

    #[rstest]
    fn test_scenario_log_and_checkout_by_prefix(mut repository: Repository) {
        let c0 = repository.head().unwrap().clone();
        pretty_assertions::assert_eq!(repository.add("a.txt", "x").unwrap(), AddOutcome::Staged);
        let c1 = repository.commit("m1").unwrap();

        let commit = repository.head_commit().unwrap();
        pretty_assertions::assert_eq!(commit.parent(), Some(&c0));
        pretty_assertions::assert_eq!(
            commit.tracked_files(),
            &TrackedFiles::from([("a.txt".to_string(), digest(b"x"))])
        );
        pretty_assertions::assert_eq!(log_oids(&repository), vec![c1.clone(), c0.clone()]);

        let checkout = repository.checkout(c0.abbreviate(8)).unwrap();

        pretty_assertions::assert_eq!(checkout, Checkout::new(c0.clone(), 0));
        assert!(repository.current_state().unwrap().tracked_files.is_empty());
        pretty_assertions::assert_eq!(log_oids(&repository), vec![c0]);
    }

    #[rstest]
    fn test_checkout_discards_staged_changes(mut repository: Repository) {
        let c0 = repository.head().unwrap().clone();
        repository.add("a.txt", "x").unwrap();
        repository.commit("m1").unwrap();
        repository.add("b.txt", "pending").unwrap();

        let checkout = repository.checkout(c0.as_ref()).unwrap();

        pretty_assertions::assert_eq!(checkout.discarded, 1);
        assert!(repository.index().is_empty());
        // the blob written by add is kept
        assert!(repository.database().contains(&digest(b"pending")));
    }

    #[rstest]
    fn test_failed_checkout_leaves_state_untouched(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();
        let c1 = repository.commit("m1").unwrap();
        repository.add("b.txt", "pending").unwrap();

        pretty_assertions::assert_eq!(
            repository.checkout("zzzz"),
            Err(RepositoryError::CommitNotFound("zzzz".to_string()))
        );
        assert!(matches!(
            repository.checkout(""),
            Err(RepositoryError::AmbiguousPrefix { .. })
        ));

        pretty_assertions::assert_eq!(repository.head().unwrap(), &c1);
        pretty_assertions::assert_eq!(repository.index().len(), 1);
    }

    #[rstest]
    fn test_checkout_relative_revision(mut repository: Repository) {
        let c0 = repository.head().unwrap().clone();
        repository.add("a.txt", "x").unwrap();
        let c1 = repository.commit("m1").unwrap();
        repository.add("a.txt", "y").unwrap();
        repository.commit("m2").unwrap();

        pretty_assertions::assert_eq!(repository.checkout("HEAD^").unwrap().target, c1);
        pretty_assertions::assert_eq!(repository.checkout("@~1").unwrap().target, c0);
    }

    #[rstest]
    fn test_commit_after_checkout_branches_from_new_head(mut repository: Repository) {
        let c0 = repository.head().unwrap().clone();
        repository.add("a.txt", "x").unwrap();
        repository.commit("m1").unwrap();
        repository.checkout(c0.as_ref()).unwrap();

        repository.add("b.txt", "y").unwrap();
        let c2 = repository.commit("m2").unwrap();

        pretty_assertions::assert_eq!(log_oids(&repository), vec![c2, c0]);
        pretty_assertions::assert_eq!(repository.history().len(), 3);
    }

    #[rstest]
    fn test_log_is_restartable(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();
        repository.commit("m1").unwrap();

        let first = log_oids(&repository);
        let second = log_oids(&repository);

        pretty_assertions::assert_eq!(first, second);
        pretty_assertions::assert_eq!(first.len(), 2);
    }

    #[rstest]
    fn test_current_state_reports_head_and_staging(mut repository: Repository) {
        repository.add("a.txt", "x").unwrap();
        let c1 = repository.commit("m1").unwrap();
        repository.add("b.txt", "y").unwrap();

        let state = repository.current_state().unwrap();

        pretty_assertions::assert_eq!(state.head, c1);
        pretty_assertions::assert_eq!(state.tracked_files.get("a.txt"), Some(&digest(b"x")));
        pretty_assertions::assert_eq!(state.staged.get("b.txt"), Some(&digest(b"y")));
    }

    #[derive(Debug, Clone)]
    enum Operation {
        Add(String, String),
        Commit(String),
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            ("[a-c]\\.txt", "[xyz]").prop_map(|(name, content)| Operation::Add(name, content)),
            "m[0-9]".prop_map(Operation::Commit),
        ]
    }

    proptest! {
        #[test]
        fn test_history_invariants_hold(operations in proptest::collection::vec(operation(), 0..24)) {
            let mut repository = Repository::with_clock(ticking_clock());
            repository.init().unwrap();

            for operation in operations {
                match operation {
                    Operation::Add(name, content) => {
                        repository.add(&name, content).unwrap();
                    }
                    Operation::Commit(message) => {
                        let parent = repository.head_commit().unwrap().clone();
                        let staged = repository.index().snapshot();

                        match repository.commit(&message) {
                            Ok(_) => {
                                let mut expected = parent.tracked_files().clone();
                                expected.extend(staged);
                                let commit = repository.head_commit().unwrap();
                                prop_assert_eq!(commit.tracked_files(), &expected);
                                prop_assert_eq!(commit.parent(), Some(parent.oid()));
                            }
                            Err(error) => {
                                prop_assert_eq!(error, RepositoryError::NothingToCommit);
                                prop_assert!(staged.is_empty());
                            }
                        }
                    }
                }
            }

            for commit in repository.log().unwrap() {
                let commit = commit.unwrap();
                prop_assert!(commit.verify_id());
                for oid in commit.tracked_files().values() {
                    prop_assert!(repository.database().contains(oid));
                }
            }
        }
    }
}
