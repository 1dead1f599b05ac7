//! Example session touching every command once

use crate::commands::Session;
use std::io::Write;

const STAGE_AND_COMMIT: &[&str] = &[
    "status",
    "add file1.txt Hello",
    "status",
    r#"commit "Add file1.txt""#,
    "status",
    r#"add file1.txt "Hello World!""#,
    r#"add file2.txt "Another file.""#,
    "status",
    r#"commit "Update file1, add file2""#,
    "status",
    r#"add file1.txt "Hello World!""#,
    "status",
    "log",
];

/// Characters of the root ID used to show prefix checkout
const DEMO_PREFIX_LENGTH: usize = 6;

impl Session {
    /// Replay the example session, echoing each command
    pub fn demo(&mut self) -> anyhow::Result<()> {
        let echo = self.options.echo;
        self.options.echo = true;

        let result = self.replay_demo();

        self.options.echo = echo;
        result
    }

    fn replay_demo(&mut self) -> anyhow::Result<()> {
        self.run_line("init")?;
        let root = self.repository.head()?.clone();

        for line in STAGE_AND_COMMIT {
            self.run_line(line)?;
        }

        self.run_line(&format!("checkout {}", root.abbreviate(DEMO_PREFIX_LENGTH)))?;
        self.run_line("status")?;
        self.run_line("log")?;
        self.writer.flush()?;

        Ok(())
    }
}
