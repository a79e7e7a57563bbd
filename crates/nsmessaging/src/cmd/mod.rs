use clap::{Args, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::exit::{io_error, CliResult};
use crate::output::OutputFormat;

pub mod canon;
pub mod check;
pub mod fields;
pub mod types;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a message and print it in canonical form.
    Canon(CanonArgs),
    /// Decode a message and report its type, or why it is invalid.
    Check(CheckArgs),
    /// Print the field table of a message or record type.
    Fields(FieldsArgs),
    /// List registered message types.
    Types(TypesArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Canon(args) => canon::run(args),
        Command::Check(args) => check::run(args, format),
        Command::Fields(args) => fields::run(args, format),
        Command::Types(args) => types::run(args, format),
        Command::Version(args) => version::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// JSON message file. Reads stdin when omitted or `-`.
    pub file: Option<PathBuf>,
    /// Reject keys that are not in the field table.
    #[arg(long)]
    pub strict: bool,
}

impl InputArgs {
    pub fn read(&self) -> CliResult<String> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                .map_err(|err| io_error(&format!("read {}", path.display()), err)),
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| io_error("read stdin", err))?;
                Ok(text)
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct CanonArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Indent the output. The result is no longer canonical.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct FieldsArgs {
    /// Message type (`GsmRecord`), payload record (`GsmRecordData`) or nested record name.
    pub type_name: String,
}

#[derive(Args, Debug, Default)]
pub struct TypesArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show build provenance and wire encoding rules.
    #[arg(long)]
    pub extended: bool,
}
