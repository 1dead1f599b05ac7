use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitlet::areas::repository::{Clock, Repository, system_clock};
use gitlet::artifacts::objects::SHORT_OBJECT_ID_LENGTH;
use gitlet::commands::{Session, SessionOptions, fixed_clock, parse_commit_date};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal in-memory version control core",
    long_about = "Gitlet keeps content-addressed blobs, a staging area and a linear commit \
    history in memory. Commands are read as a script, one per line, from a file or stdin.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value_t = SHORT_OBJECT_ID_LENGTH,
        help = "Number of characters shown for abbreviated IDs"
    )]
    abbrev: usize,
    #[arg(
        long,
        global = true,
        env = "GITLET_COMMIT_DATE",
        help = "Fixed timestamp for every commit (seconds, RFC 2822 or '%Y-%m-%d %H:%M:%S %z')"
    )]
    date: Option<String>,
    #[arg(long, global = true, help = "Echo each command before running it")]
    echo: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "run",
        about = "Run a command script",
        long_about = "This command runs a script of gitlet commands against a fresh repository. \
        Reads stdin when no script path is given."
    )]
    Run {
        #[arg(index = 1, help = "The path to the script")]
        script: Option<PathBuf>,
    },
    #[command(
        name = "demo",
        about = "Replay an example session",
        long_about = "This command replays an example session covering init, add, commit, \
        status, log and checkout by commit ID prefix."
    )]
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gitlet=warn")),
        )
        .init();
    colored::control::set_override(std::io::stdout().is_terminal());

    let cli = Cli::parse();

    let clock: Clock = match &cli.date {
        Some(date) => fixed_clock(parse_commit_date(date)?),
        None => Box::new(system_clock),
    };
    let mut session = Session::new(
        Repository::with_clock(clock),
        Box::new(std::io::stdout()),
        SessionOptions::new(cli.abbrev, cli.echo),
    );

    match &cli.command {
        Commands::Run { script } => match script {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("unable to open script {}", path.display()))?;
                session.run_script(std::io::BufReader::new(file))?
            }
            None => session.run_script(std::io::stdin().lock())?,
        },
        Commands::Demo => session.demo()?,
    }

    Ok(())
}
