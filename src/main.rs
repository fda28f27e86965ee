mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use parley_catalog::{Catalog, ProtocolTable};
use parley_core::dispatch::{CommandResponse, Dispatcher, Executable, HelpExecutable};
use parley_core::{Command, CommandRegistry, Protocol};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Interprets commands against a command catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command catalog to load instead of the configured one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Configuration file.
    #[arg(long, default_value = "Parley.toml")]
    config: PathBuf,

    /// Commands to interpret. Read from stdin when none are given.
    lines: Vec<String>,
}

struct Afk;

impl Executable for Afk {
    fn protocol(&self) -> Protocol {
        Protocol::AFK
    }

    fn execute(&self, _command: &Command<'_>) -> CommandResponse {
        let mut response = CommandResponse::processed();
        response.reply("You are now away from keyboard");
        response
    }
}

struct Quit;

impl Executable for Quit {
    fn protocol(&self) -> Protocol {
        Protocol::QUIT
    }

    fn execute(&self, _command: &Command<'_>) -> CommandResponse {
        let mut response = CommandResponse::processed();
        response.reply("Goodbye");
        response
    }
}

struct Session {
    registry: CommandRegistry,
    dispatcher: Dispatcher,
    echo_unknown: bool,
}

impl Session {
    /// Returns false once a quit command has been handled.
    fn handle(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        let command = match self.registry.interpret(line) {
            Ok(command) => command,
            Err(err) => {
                warn!("{}", err);
                if self.echo_unknown {
                    eprintln!("{}", err);
                }
                return true;
            }
        };

        match self.dispatcher.dispatch(&command) {
            Ok(response) => {
                for message in response.messages() {
                    println!("{}", message);
                }
                for error in response.errors() {
                    eprintln!("{}", error);
                }
            }
            Err(err) => eprintln!("{}", err),
        }
        command.protocol() != Some(Protocol::QUIT)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&args.config)?;

    // Setup logging
    let logfile = tracing_appender::rolling::daily(&config.log_directory, "parley.log");
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("PARLEY_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(logfile.and(io::stdout))
        .with_env_filter(env_filter)
        .init();

    let catalog_path = args
        .catalog
        .unwrap_or_else(|| PathBuf::from(&config.catalog));
    let catalog = Catalog::load(&catalog_path, &ProtocolTable::with_defaults())
        .with_context(|| format!("loading catalog {}", catalog_path.display()))?;
    let header = catalog.header();
    if !header.version.is_empty() {
        info!("Command catalog version {} by {}", header.version, header.author);
    }

    let mut registry = CommandRegistry::new();
    registry
        .register_all(catalog.into_definitions())
        .context("registering command definitions")?;
    info!("Registered {} commands", registry.len());

    let mut dispatcher = Dispatcher::new();
    dispatcher.register_executable(Box::new(HelpExecutable::new(
        Protocol::HELP,
        registry.all().to_vec(),
    )));
    dispatcher.register_executable(Box::new(Afk));
    dispatcher.register_executable(Box::new(Quit));

    let session = Session {
        registry,
        dispatcher,
        echo_unknown: config.echo_unknown,
    };

    if !args.lines.is_empty() {
        for line in &args.lines {
            if !session.handle(line) {
                break;
            }
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        if !session.handle(&line?) {
            break;
        }
    }
    Ok(())
}
