use crate::areas::repository::InitOutcome;
use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::Session;
use std::io::Write;

impl Session {
    /// Initialize the repository, returning the HEAD it ends up at
    pub fn init(&mut self) -> anyhow::Result<Option<ObjectId>> {
        let outcome = self.repository.init();
        let Some(outcome) = self.recover(outcome)? else {
            return Ok(None);
        };

        match &outcome {
            InitOutcome::Initialized(root_oid) => {
                writeln!(self.writer, "Initialized empty Gitlet repository.")?;
                writeln!(self.writer, "Initial commit ID: {root_oid}")?;
            }
            InitOutcome::AlreadyInitialized(_) => {
                writeln!(self.writer, "Repository already initialized.")?;
            }
        }

        Ok(Some(outcome.head().clone()))
    }
}
