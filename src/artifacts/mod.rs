//! Repository data structures and algorithms
//!
//! - `log`: Commit history traversal
//! - `objects`: Object types (blob, commit), identifiers and the content digest
//! - `revision`: Revision parsing and commit ID prefix resolution
//! - `status`: Read-only repository snapshot for display

pub mod log;
pub mod objects;
pub mod revision;
pub mod status;
