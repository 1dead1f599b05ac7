use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::Session;
use std::io::Write;

impl Session {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<Option<ObjectId>> {
        let commit_oid = self.repository.commit(message);

        let Some(commit_oid) = self.recover(commit_oid)? else {
            return Ok(None);
        };
        writeln!(self.writer, "Committed changes with ID: {commit_oid}")?;

        Ok(Some(commit_oid))
    }
}
