//! Blob object
//!
//! Blobs hold raw file content. They carry no filename; the name to digest mapping
//! lives in the staging area and in each commit's tracked files.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

/// Immutable file content addressed by its digest
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    #[new(into)]
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Bytes {
        self.content.clone()
    }
}

impl Object for Blob {
    fn display(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}
