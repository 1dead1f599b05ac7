use crate::artifacts::objects::object_id::ObjectId;
use crate::commands::Session;
use std::io::Write;

impl Session {
    pub fn checkout(&mut self, revision: &str) -> anyhow::Result<Option<ObjectId>> {
        let checkout = self.repository.checkout(revision);
        let Some(checkout) = self.recover(checkout)? else {
            return Ok(None);
        };

        if checkout.target.as_ref() != revision {
            writeln!(self.writer, "Checking out full commit ID: {}", checkout.target)?;
        }

        let summary = self
            .repository
            .head_commit()
            .map(|commit| commit.short_message().to_string());
        let summary = self.recover(summary)?.unwrap_or_default();
        writeln!(
            self.writer,
            "HEAD is now at {} {}",
            checkout.target.abbreviate(self.options.abbrev),
            summary
        )?;

        if checkout.discarded > 0 {
            writeln!(
                self.writer,
                "Warning: Staging area cleared due to checkout ({} staged file(s) discarded).",
                checkout.discarded
            )?;
        }

        Ok(Some(checkout.target))
    }
}
