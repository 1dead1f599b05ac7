//! Plumbing commands (low-level object inspection)
//!
//! ## Commands
//!
//! - `hash-object`: Compute the ID content would be stored under
//! - `cat-file`: Print a stored blob or commit

pub mod cat_file;
pub mod hash_object;
