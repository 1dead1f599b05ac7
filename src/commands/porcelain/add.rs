use crate::areas::repository::AddOutcome;
use crate::commands::Session;
use bytes::Bytes;
use std::io::Write;

impl Session {
    pub fn add(&mut self, name: &str, content: impl Into<Bytes>) -> anyhow::Result<()> {
        let outcome = self.repository.add(name, content);

        match self.recover(outcome)? {
            Some(AddOutcome::Staged) => writeln!(self.writer, "Staged '{name}' for commit.")?,
            Some(AddOutcome::Unstaged) => {
                writeln!(self.writer, "Unstaged '{name}', content matches HEAD.")?
            }
            Some(AddOutcome::NoOp) | None => {}
        }

        Ok(())
    }
}
