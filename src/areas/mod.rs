//! Core repository components
//!
//! This module contains the stores the repository is built from:
//!
//! - `database`: Object store mapping blob IDs to content
//! - `index`: Staging area of pending filename to blob ID changes
//! - `history`: Commit graph mapping commit IDs to commits
//! - `repository`: Controller coordinating the stores and HEAD

pub mod database;
pub mod history;
pub mod index;
pub mod repository;
