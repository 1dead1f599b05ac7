//! Porcelain commands (user-facing operations)
//!
//! Each command calls into the repository and prints the outcome in the
//! console format of the session.
//!
//! ## Commands
//!
//! - `init`: Create the root commit
//! - `add`: Stage content for a file
//! - `commit`: Record the staged changes
//! - `log`: Show commit history from HEAD
//! - `checkout`: Move HEAD to another commit
//! - `status`: Show the files at HEAD and the staging area

pub mod add;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod status;
