use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{generate::generate, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
///
/// Fatal failures (bad config, unreadable inputs, extraction errors) come back
/// as `Err`; the caller maps them to [`ExitStatus::Error`].
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(args)) => generate(args),
        Some(Command::Init(args)) => init(args),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
