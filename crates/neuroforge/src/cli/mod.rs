mod argv;
mod options;

pub use argv::passthrough_unknown;
pub use options::Options;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// NeuroForge command-line interface
#[derive(Parser, Debug)]
#[command(name = "neuroforge")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Enable verbose output (any `=value` is ignored).
    #[arg(short, long)]
    pub verbose: bool,

    /// Input path.
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    pub input: Option<String>,

    /// Output path.
    #[arg(short, long, num_args = 0..=1, default_missing_value = "")]
    pub output: Option<String>,

    /// Configuration file path (defaults to ./neuroforge.toml when present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Positional and unrecognized arguments.
    pub args: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, letting unknown flags through.
    pub fn parse_lenient() -> Self {
        Self::parse_from(passthrough_unknown(std::env::args_os()))
    }

    /// Convert the parsed command line into invocation options.
    pub fn into_options(self) -> Options {
        Options {
            verbose: self.verbose,
            input: self.input,
            output: self.output,
            config: self.config,
            args: self.args,
        }
    }
}

/// Parse a full argument vector (program name first) into options.
pub fn parse_options<I, T>(args: I) -> Result<Options, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    Cli::try_parse_from(passthrough_unknown(args)).map(Cli::into_options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let options = parse_options(["neuroforge"]).unwrap();
        assert!(!options.verbose);
        assert_eq!(options.input, None);
        assert_eq!(options.output, None);
        assert_eq!(options.config, None);
        assert!(options.args.is_empty());
    }

    #[test]
    fn test_cli_parse_verbose() {
        assert!(parse_options(["neuroforge", "-v"]).unwrap().verbose);
        assert!(parse_options(["neuroforge", "--verbose"]).unwrap().verbose);
        assert!(parse_options(["neuroforge", "-v", "--verbose"]).unwrap().verbose);
    }

    #[test]
    fn test_cli_parse_without_verbose() {
        let options = parse_options(["neuroforge", "-i", "in.txt", "data"]).unwrap();
        assert!(!options.verbose);
    }

    #[test]
    fn test_cli_parse_input_output() {
        let options =
            parse_options(["neuroforge", "-i", "in.txt", "--output", "out.txt"]).unwrap();
        assert_eq!(options.input.as_deref(), Some("in.txt"));
        assert_eq!(options.output.as_deref(), Some("out.txt"));

        let options = parse_options(["neuroforge", "--input", "a", "-o", "b"]).unwrap();
        assert_eq!(options.input.as_deref(), Some("a"));
        assert_eq!(options.output.as_deref(), Some("b"));
    }

    #[test]
    fn test_cli_parse_missing_value_degrades_to_empty() {
        let options = parse_options(["neuroforge", "-i"]).unwrap();
        assert_eq!(options.input.as_deref(), Some(""));

        let options = parse_options(["neuroforge", "-o", "-v"]).unwrap();
        assert_eq!(options.output.as_deref(), Some(""));
        assert!(options.verbose);
    }

    #[test]
    fn test_cli_parse_repeated_value_last_wins() {
        let options = parse_options(["neuroforge", "-i", "first", "-i", "second"]).unwrap();
        assert_eq!(options.input.as_deref(), Some("second"));
    }

    #[test]
    fn test_cli_parse_positional_passthrough() {
        let options = parse_options(["neuroforge", "train", "-v", "model.bin"]).unwrap();
        assert!(options.verbose);
        assert_eq!(options.args, vec!["train", "model.bin"]);
    }

    #[test]
    fn test_cli_parse_hyphenated_after_separator() {
        let options = parse_options(["neuroforge", "-v", "--", "--epochs=3", "-x"]).unwrap();
        assert!(options.verbose);
        assert_eq!(options.args, vec!["--epochs=3", "-x"]);
    }

    #[test]
    fn test_cli_parse_unknown_flags_pass_through() {
        let options = parse_options(["neuroforge", "--epochs", "3"]).unwrap();
        assert_eq!(options.args, vec!["--epochs", "3"]);

        let options =
            parse_options(["neuroforge", "train", "--lr=0.1", "-v", "-x", "model.bin"]).unwrap();
        assert!(options.verbose);
        assert_eq!(options.args, vec!["train", "--lr=0.1", "-x", "model.bin"]);
    }

    #[test]
    fn test_cli_parse_unknown_flag_before_known_value_flag() {
        let options = parse_options(["neuroforge", "--foo", "-i", "in.txt"]).unwrap();
        assert_eq!(options.input.as_deref(), Some("in.txt"));
        assert_eq!(options.args, vec!["--foo"]);
    }

    #[test]
    fn test_cli_parse_verbose_ignores_value() {
        for arg in ["--verbose=true", "--verbose=false", "--verbose=1", "-v=0"] {
            let options = parse_options(["neuroforge", arg]).unwrap();
            assert!(options.verbose, "{arg} should enable verbose");
            assert!(options.args.is_empty());
        }
    }

    #[test]
    fn test_cli_parse_short_cluster() {
        let options = parse_options(["neuroforge", "-vi", "in.txt"]).unwrap();
        assert!(options.verbose);
        assert_eq!(options.input.as_deref(), Some("in.txt"));
    }

    #[test]
    fn test_cli_parse_config() {
        let options = parse_options(["neuroforge", "-c", "custom.toml"]).unwrap();
        assert_eq!(options.config, Some(PathBuf::from("custom.toml")));
    }
}
