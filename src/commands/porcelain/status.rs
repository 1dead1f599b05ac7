use crate::commands::Session;
use std::io::Write;

impl Session {
    /// Print every file at HEAD with its content, then the staging area
    pub fn status(&mut self) -> anyhow::Result<()> {
        let state = self.repository.current_state();
        let Some(state) = self.recover(state)? else {
            return Ok(());
        };
        let abbrev = self.options.abbrev;

        writeln!(
            self.writer,
            "--- Files at HEAD ({}) ---",
            state.head.abbreviate(abbrev)
        )?;
        if state.tracked_files.is_empty() {
            writeln!(self.writer, "(No files tracked in this commit)")?;
        }
        for (name, oid) in &state.tracked_files {
            let content = self.repository.read_blob(oid);
            if let Some(content) = self.recover(content)? {
                writeln!(
                    self.writer,
                    "'{name}' : \"{}\"",
                    String::from_utf8_lossy(&content)
                )?;
            }
        }
        writeln!(self.writer, "--------------------------")?;

        if !state.has_pending_changes() {
            writeln!(self.writer, "(Staging area is empty)")?;
            return Ok(());
        }

        writeln!(self.writer, "--- Staging Area ---")?;
        for (name, oid) in &state.staged {
            writeln!(
                self.writer,
                "Staged: '{name}' (Content Hash: {}...)",
                oid.abbreviate(abbrev)
            )?;
        }
        writeln!(self.writer, "--------------------")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::artifacts::objects::digest::digest;
    use crate::commands::tests::session;

    #[test]
    fn test_status_of_fresh_repository() {
        let (mut session, buffer) = session();
        let root_oid = session.init().unwrap().unwrap();
        let before = buffer.contents().len();

        session.status().unwrap();

        pretty_assertions::assert_eq!(
            &buffer.contents()[before..],
            format!(
                "--- Files at HEAD ({}) ---\n\
                 (No files tracked in this commit)\n\
                 --------------------------\n\
                 (Staging area is empty)\n",
                root_oid.to_short_oid()
            )
        );
    }

    #[test]
    fn test_status_shows_contents_and_staged_files() {
        let (mut session, buffer) = session();
        session.init().unwrap();
        session.add("file1.txt", "Hello").unwrap();
        let commit_oid = session.commit("Add file1.txt").unwrap().unwrap();
        session.add("file2.txt", "Another file.").unwrap();
        let before = buffer.contents().len();

        session.status().unwrap();

        pretty_assertions::assert_eq!(
            &buffer.contents()[before..],
            format!(
                "--- Files at HEAD ({}) ---\n\
                 'file1.txt' : \"Hello\"\n\
                 --------------------------\n\
                 --- Staging Area ---\n\
                 Staged: 'file2.txt' (Content Hash: {}...)\n\
                 --------------------\n",
                commit_oid.to_short_oid(),
                digest(b"Another file.").to_short_oid()
            )
        );
    }
}
