use std::path::PathBuf;

/// Invocation options parsed from the command line.
///
/// Every field is optional; defaults are resolved when the application is
/// constructed, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Verbose mode (`-v`, `--verbose`).
    pub verbose: bool,
    /// Input path or value (`-i`, `--input`).
    pub input: Option<String>,
    /// Output path or value (`-o`, `--output`).
    pub output: Option<String>,
    /// Configuration file (`-c`, `--config`).
    pub config: Option<PathBuf>,
    /// Positional and unrecognized arguments, in order.
    pub args: Vec<String>,
}
