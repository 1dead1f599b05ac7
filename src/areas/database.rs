use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};
use bytes::Bytes;
use std::collections::HashMap;

/// Append-only, deduplicating object store
///
/// Entries are never removed or replaced once stored.
#[derive(Debug, Default)]
pub struct Database {
    objects: HashMap<ObjectId, Bytes>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object unless an object with the same ID already exists
    ///
    /// # Returns
    ///
    /// The object ID, whether or not the object was newly inserted
    pub fn store(&mut self, object: &impl Object) -> ObjectId {
        let object_id = object.object_id();

        if !self.objects.contains_key(&object_id) {
            tracing::debug!(oid = %object_id, "storing new object");
            self.objects.insert(object_id.clone(), object.serialize());
        }

        object_id
    }

    /// Store raw content as a blob
    pub fn put(&mut self, content: impl Into<Bytes>) -> ObjectId {
        self.store(&Blob::new(content))
    }

    /// Load the content stored under the given ID
    ///
    /// A missing entry means some commit or staging entry references content that
    /// was never stored, so it is reported as an integrity violation.
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        self.objects.get(object_id).cloned().ok_or_else(|| {
            tracing::error!(oid = %object_id, "referenced blob is missing");
            RepositoryError::BlobMissing(object_id.clone())
        })
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> Result<Blob> {
        self.load(object_id).map(Blob::new)
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.objects.contains_key(object_id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::digest::digest;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn database() -> Database {
        Database::new()
    }

    #[rstest]
    fn test_put_returns_content_digest(mut database: Database) {
        let oid = database.put("Hello");

        pretty_assertions::assert_eq!(oid, digest(b"Hello"));
        pretty_assertions::assert_eq!(database.load(&oid).unwrap(), Bytes::from("Hello"));
    }

    #[rstest]
    fn test_put_deduplicates_identical_content(mut database: Database) {
        let first = database.put("same");
        let second = database.put(String::from("same"));

        pretty_assertions::assert_eq!(first, second);
        pretty_assertions::assert_eq!(database.len(), 1);
    }

    #[rstest]
    fn test_load_missing_blob_is_an_error(database: Database) {
        let oid = digest(b"never stored");

        pretty_assertions::assert_eq!(
            database.load(&oid),
            Err(RepositoryError::BlobMissing(oid.clone()))
        );
        assert!(database.is_empty());
    }

    #[rstest]
    fn test_parse_object_as_blob(mut database: Database) {
        let oid = database.put("content");

        let blob = database.parse_object_as_blob(&oid).unwrap();
        pretty_assertions::assert_eq!(blob.content(), &Bytes::from("content"));
    }

    proptest! {
        #[test]
        fn test_store_size_counts_distinct_contents(
            contents in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..16), 0..32)
        ) {
            let mut database = Database::new();
            for content in &contents {
                database.put(content.clone());
            }

            let distinct = contents
                .iter()
                .map(|content| digest(content))
                .collect::<std::collections::HashSet<_>>();
            prop_assert_eq!(database.len(), distinct.len());
        }
    }
}
