use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::Session;
use bytes::Bytes;
use std::io::Write;

impl Session {
    /// Print the ID the content would get, without storing it
    pub fn hash_object(&mut self, content: impl Into<Bytes>) -> anyhow::Result<ObjectId> {
        let object_id = Blob::new(content).object_id();
        writeln!(self.writer, "{object_id}")?;

        Ok(object_id)
    }
}
