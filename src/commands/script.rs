//! Line-based command language
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.
//! Arguments are separated by whitespace; double quotes group words and understand
//! the `\n`, `\t`, `\"` and `\\` escapes. Trailing words of `add`, `commit` and
//! `hash-object` are joined with single spaces, so quoting is optional there.

use crate::commands::Session;
use anyhow::Context;
use std::io::{BufRead, Write};

pub const TOKEN_REGEX: &str = r#""((?:[^"\\]|\\.)*)"|(\S+)"#;
pub const COMMAND_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "ci" => "commit",
    "co" => "checkout",
    "st" => "status",
};
pub const USAGE: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "init" => "init",
    "add" => "add <file> <content>",
    "commit" => "commit <message>",
    "log" => "log",
    "checkout" => "checkout <commit-id-or-prefix>",
    "status" => "status",
    "hash-object" => "hash-object <content>",
    "cat-file" => "cat-file <object-id>",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Init,
    Add { name: String, content: String },
    Commit { message: String },
    Log,
    Checkout { revision: String },
    Status,
    HashObject { content: String },
    CatFile { sha: String },
}

impl ScriptCommand {
    /// Parse one script line
    ///
    /// # Returns
    ///
    /// None for blank and comment lines, an error for unknown commands or wrong arguments
    pub fn try_parse(line: &str) -> anyhow::Result<Option<ScriptCommand>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let tokens = tokenize(line)?;
        let Some((command, args)) = tokens.split_first() else {
            return Ok(None);
        };
        let command = *COMMAND_ALIASES
            .get(command.as_str())
            .unwrap_or(&command.as_str());

        let script_command = match (command, args) {
            ("init", []) => ScriptCommand::Init,
            ("add", [name, content @ ..]) if !content.is_empty() => ScriptCommand::Add {
                name: name.clone(),
                content: content.join(" "),
            },
            ("commit", message) if !message.is_empty() => ScriptCommand::Commit {
                message: message.join(" "),
            },
            ("log", []) => ScriptCommand::Log,
            ("checkout", [revision]) => ScriptCommand::Checkout {
                revision: revision.clone(),
            },
            ("status", []) => ScriptCommand::Status,
            ("hash-object", content) if !content.is_empty() => ScriptCommand::HashObject {
                content: content.join(" "),
            },
            ("cat-file", [sha]) => ScriptCommand::CatFile { sha: sha.clone() },
            (command, _) => match USAGE.get(command) {
                Some(usage) => anyhow::bail!("usage: {usage}"),
                None => anyhow::bail!("unknown command '{command}'"),
            },
        };

        Ok(Some(script_command))
    }
}

fn tokenize(line: &str) -> anyhow::Result<Vec<String>> {
    let token_regex = regex::Regex::new(TOKEN_REGEX)
        .with_context(|| format!("invalid token regex: {TOKEN_REGEX}"))?;

    token_regex
        .captures_iter(line)
        .map(|caps| match (caps.get(1), caps.get(2)) {
            (Some(quoted), _) => unescape(quoted.as_str()),
            (None, Some(bare)) if bare.as_str().starts_with('"') => {
                anyhow::bail!("unterminated quote in: {line}")
            }
            (None, Some(bare)) => Ok(bare.as_str().to_string()),
            (None, None) => anyhow::bail!("failed to tokenize: {line}"),
        })
        .collect()
}

fn unescape(quoted: &str) -> anyhow::Result<String> {
    let mut unescaped = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some('t') => unescaped.push('\t'),
            Some('"') => unescaped.push('"'),
            Some('\\') => unescaped.push('\\'),
            Some(other) => anyhow::bail!("unknown escape sequence '\\{other}'"),
            None => anyhow::bail!("dangling escape at end of: {quoted}"),
        }
    }

    Ok(unescaped)
}

impl Session {
    pub fn execute(&mut self, command: &ScriptCommand) -> anyhow::Result<()> {
        match command {
            ScriptCommand::Init => {
                self.init()?;
            }
            ScriptCommand::Add { name, content } => self.add(name, content.clone())?,
            ScriptCommand::Commit { message } => {
                self.commit(message)?;
            }
            ScriptCommand::Log => self.log()?,
            ScriptCommand::Checkout { revision } => {
                self.checkout(revision)?;
            }
            ScriptCommand::Status => self.status()?,
            ScriptCommand::HashObject { content } => {
                self.hash_object(content.clone())?;
            }
            ScriptCommand::CatFile { sha } => self.cat_file(sha)?,
        }

        Ok(())
    }

    /// Parse and run a single line, echoing it first when asked to
    pub fn run_line(&mut self, line: &str) -> anyhow::Result<()> {
        let Some(command) = ScriptCommand::try_parse(line)? else {
            return Ok(());
        };

        if self.options.echo {
            writeln!(self.writer, ">>> {}", line.trim())?;
        }
        self.execute(&command)
    }

    /// Run every line of a script, stopping at the first malformed line
    pub fn run_script(&mut self, reader: impl BufRead) -> anyhow::Result<()> {
        for (number, line) in reader.lines().enumerate() {
            let line = line.context("unable to read script")?;
            self.run_line(&line)
                .with_context(|| format!("line {}: {}", number + 1, line.trim()))?;
        }
        self.writer.flush()?;

        Ok(())
    }
}
