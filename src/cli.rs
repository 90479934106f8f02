//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::ConfigError;
use crate::domain::value::Value;
use crate::ports::config_port::ConfigPort;

#[derive(Parser, Debug)]
#[command(name = "typedconf", about = "Typed access to sectioned INI configuration files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the coerced value of a key
    Get {
        #[arg(short, long)]
        config: PathBuf,
        section: String,
        key: String,
        /// Prefix the value with its inferred type
        #[arg(long)]
        show_type: bool,
    },
    /// List section names in file order
    Sections {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Store a raw value and rewrite the file
    Set {
        #[arg(short, long)]
        config: PathBuf,
        section: String,
        key: String,
        value: String,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match execute(&cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Run `command` and return the lines it prints on success.
pub fn execute(command: &Command) -> Result<Vec<String>, ConfigError> {
    match command {
        Command::Get {
            config,
            section,
            key,
            show_type,
        } => {
            let adapter = FileConfigAdapter::open(config);
            let value = adapter.get_value(section, key);
            Ok(vec![format_value(&value, *show_type)])
        }
        Command::Sections { config } => Ok(FileConfigAdapter::open(config).get_sections()),
        Command::Set {
            config,
            section,
            key,
            value,
        } => {
            let mut adapter = FileConfigAdapter::open(config);
            adapter.set_value(section, key, value)?;
            tracing::info!("wrote [{section}] {key} to {}", config.display());
            Ok(Vec::new())
        }
    }
}

pub fn format_value(value: &Value, show_type: bool) -> String {
    if show_type {
        format!("{}: {value}", value.kind())
    } else {
        value.to_string()
    }
}
