use std::path::PathBuf;

use clap::Parser;
use ds_config::Overrides;

/// Top-level CLI parser for the `dumpstructs` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dumpstructs",
    version,
    about = "List every Go struct declaration with its fields, tags and comments",
    override_usage = "dumpstructs [options]"
)]
pub struct Cli {
    /// Path to traverse to discover Go files [default: .]
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Regex pattern to use to exclude paths from list
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// TOML file providing `path` and `exclude`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Quiet mode (only errors on stderr)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Options the user passed, for layering over file and defaults.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            path: self.path.clone(),
            exclude: self.exclude.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_leaves_everything_to_config() {
        let cli = Cli::try_parse_from(["dumpstructs"]).expect("cli should parse");
        let overrides = cli.overrides();
        assert!(overrides.path.is_none());
        assert!(overrides.exclude.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from(["dumpstructs", "-p", "src", "-x", "vendor/", "-v"])
            .expect("cli should parse");
        assert_eq!(cli.path, Some(PathBuf::from("src")));
        assert_eq!(cli.exclude.as_deref(), Some("vendor/"));
        assert!(cli.verbose);
    }

    #[test]
    fn long_flags_parse() {
        let cli = Cli::try_parse_from([
            "dumpstructs",
            "--path",
            "/srv/app",
            "--exclude",
            "_test\\.go$",
            "--config",
            "dump.toml",
            "--quiet",
        ])
        .expect("cli should parse");
        let overrides = cli.overrides();
        assert_eq!(overrides.path, Some(PathBuf::from("/srv/app")));
        assert_eq!(overrides.exclude.as_deref(), Some("_test\\.go$"));
        assert_eq!(cli.config, Some(PathBuf::from("dump.toml")));
        assert!(cli.quiet);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let parsed = Cli::try_parse_from(["dumpstructs", "--quiet", "--verbose"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn positional_arguments_are_rejected() {
        let parsed = Cli::try_parse_from(["dumpstructs", "somewhere"]);
        assert!(parsed.is_err());
    }
}
