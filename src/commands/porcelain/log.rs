use crate::artifacts::objects::commit::Commit;
use crate::commands::Session;
use anyhow::Context;
use colored::Colorize;
use std::io::Write;

const SEPARATOR: &str = "--------------------";

impl Session {
    pub fn log(&mut self) -> anyhow::Result<()> {
        let rev_list = match self.repository.log() {
            Ok(rev_list) => rev_list,
            Err(error) => return self.recover::<()>(Err(error)).map(|_| ()),
        };

        writeln!(self.writer, "--- Commit History ---")?;
        for commit in rev_list {
            let commit = commit.context("unable to walk commit history")?;

            show_commit(&mut self.writer, commit, self.options.abbrev)?;
            writeln!(self.writer, "{SEPARATOR}")?;
        }

        Ok(())
    }
}

fn show_commit(writer: &mut impl Write, commit: &Commit, abbrev: usize) -> anyhow::Result<()> {
    writeln!(writer, "{}", format!("Commit: {}", commit.oid()).yellow())?;
    writeln!(writer, "Date:   {}", commit.readable_timestamp())?;
    writeln!(writer, "Message: {}", commit.message())?;

    let files = commit
        .tracked_files()
        .iter()
        .map(|(name, oid)| format!("{name} ({}...)", oid.abbreviate(abbrev)))
        .collect::<Vec<_>>();
    if files.is_empty() {
        writeln!(writer, "Files:   (none)")?;
    } else {
        writeln!(writer, "Files:   {}", files.join(", "))?;
    }

    Ok(())
}
