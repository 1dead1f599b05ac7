//! Repository object types
//!
//! Everything the repository stores is addressed by a digest of its serialized form:
//!
//! - **Blob**: raw file content
//! - **Commit**: snapshot of tracked files with message, timestamp and parent link
//!
//! Both implement [`object::Packable`] and get their identity through [`object::Object::object_id`].

pub mod blob;
pub mod commit;
pub mod digest;
pub mod object;
pub mod object_id;

/// Length of a rendered digest in hexadecimal characters
pub const OBJECT_ID_LENGTH: usize = 16;

/// Length of the abbreviated form used for display
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
