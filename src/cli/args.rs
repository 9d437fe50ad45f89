//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Extract bundle messages and write per-locale JSON catalogs
//! - `init`: Initialize catgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(args)) => args.common.verbose,
            Some(Command::Init(_)) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root; the config file is searched from here (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Bundle manifest path (overrides config file)
    #[arg(long)]
    pub bundles: Option<PathBuf>,

    /// Language info path (overrides config file)
    #[arg(long)]
    pub languages: Option<PathBuf>,

    /// Locale data folder holding translation tables and catalogs (overrides config file)
    #[arg(long)]
    pub locale_data: Option<PathBuf>,

    /// Intl code of the source-text locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Extra glob of paths to skip during extraction.
    /// Can be specified multiple times: --ignore '**/test/**' --ignore '**/dist/**'
    #[arg(long)]
    pub ignore: Vec<String>,

    /// Exit with status 1 when any translation is missing
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Directory to create the config file in (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract bundle messages and write per-locale JSON catalogs
    Generate(GenerateArgs),
    /// Initialize a new .catgenrc.json configuration file
    Init(InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_flags() {
        let args = Arguments::try_parse_from([
            "catgen",
            "generate",
            "--root",
            "web",
            "--ignore",
            "**/a/**",
            "--ignore",
            "**/b/**",
            "--strict",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose());
        let Some(Command::Generate(generate)) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(generate.common.root, Some(PathBuf::from("web")));
        assert_eq!(generate.ignore, vec!["**/a/**", "**/b/**"]);
        assert!(generate.strict);
        assert_eq!(generate.default_locale, None);
    }

    #[test]
    fn test_init_is_not_verbose() {
        let args = Arguments::try_parse_from(["catgen", "init"]).unwrap();
        assert!(!args.verbose());
        let Some(Command::Init(init)) = args.command else {
            panic!("expected init");
        };
        assert_eq!(init.root, None);
    }

    #[test]
    fn test_init_root_flag() {
        let args = Arguments::try_parse_from(["catgen", "init", "--root", "web"]).unwrap();
        let Some(Command::Init(init)) = args.command else {
            panic!("expected init");
        };
        assert_eq!(init.root, Some(PathBuf::from("web")));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }
}
