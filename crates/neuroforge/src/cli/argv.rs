//! Raw argument normalization ahead of clap.
//!
//! Tokens that are not flags clap knows about end up after a `--` separator,
//! in their original order, so they reach `Cli::args` instead of failing the
//! parse. `--verbose=<anything>` and `-v=<anything>` collapse to the bare flag.

use std::ffi::OsString;

/// Long flags that take a value.
const VALUE_LONGS: &[&str] = &["input", "output", "config"];
/// Long flags without a value.
const FLAG_LONGS: &[&str] = &["verbose", "help", "version"];
/// Short flags that take a value; the rest of the cluster is that value.
const VALUE_SHORTS: &[char] = &['i', 'o', 'c'];
/// Short flags without a value.
const FLAG_SHORTS: &[char] = &['v', 'h', 'V'];

#[derive(Debug, PartialEq, Eq)]
enum Token {
    /// Known flag, forwarded as the given text.
    Known(String),
    /// Known flag whose value, if any, is the next token.
    NeedsValue,
    /// Positional or unrecognized token.
    Positional,
}

fn classify(arg: &str) -> Token {
    if let Some(long) = arg.strip_prefix("--") {
        let (name, value) = match long.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (long, None),
        };
        return match (name, value) {
            ("verbose", Some(_)) => Token::Known("--verbose".to_string()),
            (name, None) if VALUE_LONGS.contains(&name) => Token::NeedsValue,
            (name, _) if VALUE_LONGS.contains(&name) || FLAG_LONGS.contains(&name) => {
                Token::Known(arg.to_string())
            }
            _ => Token::Positional,
        };
    }

    let Some(cluster) = arg.strip_prefix('-') else {
        return Token::Positional;
    };
    if cluster.is_empty() {
        return Token::Positional;
    }
    if cluster.starts_with("v=") {
        return Token::Known("-v".to_string());
    }

    for (pos, c) in cluster.char_indices() {
        if VALUE_SHORTS.contains(&c) {
            return if pos + c.len_utf8() == cluster.len() {
                Token::NeedsValue
            } else {
                Token::Known(arg.to_string())
            };
        }
        if !FLAG_SHORTS.contains(&c) {
            return Token::Positional;
        }
    }
    Token::Known(arg.to_string())
}

fn is_flag_like(arg: &OsString) -> bool {
    arg.to_str().is_some_and(|s| s.starts_with('-'))
}

/// Reorder a raw argument vector (program name first) for clap.
///
/// Known flags keep their relative order in front; every other token follows
/// a single `--`. A value flag given without an attached value takes the next
/// token as its value unless that token looks like a flag.
pub fn passthrough_unknown<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).peekable();
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut positional: Vec<OsString> = Vec::new();

    while let Some(arg) = args.next() {
        let token = match arg.to_str() {
            Some("--") => {
                positional.extend(args.by_ref());
                break;
            }
            Some(text) => classify(text),
            None => Token::Positional,
        };

        match token {
            Token::Known(flag) => flags.push(flag.into()),
            Token::NeedsValue => {
                flags.push(arg);
                if let Some(value) = args.next_if(|next| !is_flag_like(next)) {
                    flags.push(value);
                }
            }
            Token::Positional => positional.push(arg),
        }
    }

    if !positional.is_empty() {
        flags.push("--".into());
        flags.extend(positional);
    }
    flags
}
