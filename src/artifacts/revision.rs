use crate::areas::history::History;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, Result};

pub const HEAD: &str = "HEAD";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};

/// Represents a revision expression that can be used to identify commits.
///
/// Supports multiple formats:
/// - `HEAD` and its alias `@`
/// - Full commit IDs and unambiguous prefixes of them
/// - Parent notation: `<revision>^` (e.g., `HEAD^`, `3fa1^`)
/// - Ancestor notation: `<revision>~<n>` (e.g., `HEAD~3`, `3fa1~2`)
///
/// Commit IDs are lowercase hex and never contain `^` or `~`, so an exact ID or a
/// prefix always parses as [`Revision::Oid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// The commit HEAD points at
    Head,
    /// A full commit ID or a prefix of one
    Oid(String),
    /// The parent of a revision (e.g., HEAD^)
    Parent(Box<Revision>),
    /// The Nth ancestor of a revision (e.g., HEAD~3)
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn parse(revision: &str) -> Revision {
        if let Some(base) = revision.strip_suffix('^')
            && !base.is_empty()
        {
            return Revision::Parent(Box::new(Self::parse(base)));
        }

        if let Some((base, generations)) = revision.rsplit_once('~')
            && !base.is_empty()
            && let Ok(generations) = generations.parse::<usize>()
        {
            return Revision::Ancestor(Box::new(Self::parse(base)), generations);
        }

        match *REF_ALIASES.get(revision).unwrap_or(&revision) {
            HEAD => Revision::Head,
            _ => Revision::Oid(revision.to_string()),
        }
    }

    /// Resolve the revision to a stored commit ID
    ///
    /// # Arguments
    ///
    /// * `history` - Commit graph to search
    /// * `head` - Commit ID HEAD currently points at
    pub fn resolve(&self, history: &History, head: &ObjectId) -> Result<ObjectId> {
        match self {
            Revision::Head => Ok(head.clone()),
            Revision::Oid(id_or_prefix) => Self::resolve_oid(id_or_prefix, history),
            Revision::Parent(base) => {
                let oid = base.resolve(history, head)?;
                self.resolve_commit_parent(&oid, history)
            }
            Revision::Ancestor(base, generations) => {
                let mut oid = base.resolve(history, head)?;
                for _ in 0..*generations {
                    oid = self.resolve_commit_parent(&oid, history)?;
                }

                Ok(oid)
            }
        }
    }

    fn resolve_commit_parent(&self, oid: &ObjectId, history: &History) -> Result<ObjectId> {
        history
            .load(oid)?
            .parent()
            .cloned()
            .ok_or_else(|| RepositoryError::CommitNotFound(self.to_string()))
    }

    fn resolve_oid(id_or_prefix: &str, history: &History) -> Result<ObjectId> {
        // an exact match wins over prefix matching
        if let Ok(oid) = ObjectId::try_parse(id_or_prefix.to_string())
            && history.contains(&oid)
        {
            return Ok(oid);
        }

        let mut matches = history.find_by_prefix(id_or_prefix);

        match matches.len() {
            0 => Err(RepositoryError::CommitNotFound(id_or_prefix.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(RepositoryError::AmbiguousPrefix {
                prefix: id_or_prefix.to_string(),
                candidates: matches,
            }),
        }
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Head => write!(f, "{HEAD}"),
            Revision::Oid(id_or_prefix) => write!(f, "{id_or_prefix}"),
            Revision::Parent(base) => write!(f, "{base}^"),
            Revision::Ancestor(base, generations) => write!(f, "{base}~{generations}"),
        }
    }
}
