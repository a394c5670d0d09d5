use clap::Subcommand;
use colored::*;
use scaffold_common::config::Config;
use scaffold_core::text;

use crate::terminal::{colors, print};

#[derive(Subcommand)]
pub enum TextOp {
    /// Strip whitespace from both ends
    Trim { text: String },
    /// Strip leading whitespace
    Ltrim { text: String },
    /// Strip trailing whitespace
    Rtrim { text: String },
    /// Convert ASCII letters to upper case
    Upper { text: String },
    /// Convert ASCII letters to lower case
    Lower { text: String },
    /// Split on a delimiter, dropping empty fields
    Split {
        text: String,
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,
    },
    /// Join the given parts with a delimiter
    Join {
        #[arg(short, long, default_value = " ")]
        delimiter: String,
        parts: Vec<String>,
    },
    /// Replace every non-overlapping occurrence of a pattern
    Replace { text: String, from: String, to: String },
    /// Check whether the text starts with a prefix
    StartsWith { text: String, prefix: String },
    /// Check whether the text ends with a suffix
    EndsWith { text: String, suffix: String },
}

/// The outcome of a text operation, ready to print.
#[derive(Debug, PartialEq)]
pub enum TextOutput {
    Text(String),
    Parts(Vec<String>),
    Flag(bool),
}

pub fn apply(op: &TextOp) -> TextOutput {
    match op {
        TextOp::Trim { text } => TextOutput::Text(text::trim(text)),
        TextOp::Ltrim { text } => TextOutput::Text(text::ltrim(text)),
        TextOp::Rtrim { text } => TextOutput::Text(text::rtrim(text)),
        TextOp::Upper { text } => TextOutput::Text(text::to_upper(text)),
        TextOp::Lower { text } => TextOutput::Text(text::to_lower(text)),
        TextOp::Split { text, delimiter } => TextOutput::Parts(text::split(text, *delimiter)),
        TextOp::Join { delimiter, parts } => TextOutput::Text(text::join(parts, delimiter)),
        TextOp::Replace { text, from, to } => TextOutput::Text(text::replace_all(text, from, to)),
        TextOp::StartsWith { text, prefix } => TextOutput::Flag(text::starts_with(text, prefix)),
        TextOp::EndsWith { text, suffix } => TextOutput::Flag(text::ends_with(text, suffix)),
    }
}

pub fn run(op: TextOp, cfg: &Config) -> anyhow::Result<()> {
    let output = apply(&op);

    if cfg.quiet > 1 {
        match output {
            TextOutput::Text(text) => print::print(&text),
            TextOutput::Parts(parts) => parts.iter().for_each(|part| print::print(part)),
            TextOutput::Flag(flag) => print::print(&flag.to_string()),
        }
        return Ok(());
    }

    match output {
        TextOutput::Text(text) => print::aligned_line("Result", format!("'{text}'")),
        TextOutput::Parts(parts) => {
            print::aligned_line("Parts", parts.len().to_string());
            for (idx, part) in parts.iter().enumerate() {
                print::tree_head(idx, part);
            }
        }
        TextOutput::Flag(flag) => {
            let value: ColoredString = if flag {
                "yes".color(colors::POSITIVE)
            } else {
                "no".color(colors::NEGATIVE)
            };
            print::aligned_line("Matches", value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn transforms() {
        assert_eq!(
            apply(&TextOp::Trim { text: owned("  hi  ") }),
            TextOutput::Text(owned("hi"))
        );
        assert_eq!(
            apply(&TextOp::Upper { text: owned("hi!") }),
            TextOutput::Text(owned("HI!"))
        );
        assert_eq!(
            apply(&TextOp::Replace {
                text: owned("aaa"),
                from: owned("aa"),
                to: owned("b"),
            }),
            TextOutput::Text(owned("ba"))
        );
    }

    #[test]
    fn split_and_join() {
        assert_eq!(
            apply(&TextOp::Split {
                text: owned(",a,,b,"),
                delimiter: ',',
            }),
            TextOutput::Parts(vec![owned("a"), owned("b")])
        );
        assert_eq!(
            apply(&TextOp::Join {
                delimiter: owned(" "),
                parts: vec![owned("Hello"), owned("beautiful"), owned("world")],
            }),
            TextOutput::Text(owned("Hello beautiful world"))
        );
    }

    #[test]
    fn affix_checks() {
        assert_eq!(
            apply(&TextOp::StartsWith {
                text: owned("hello"),
                prefix: owned(""),
            }),
            TextOutput::Flag(true)
        );
        assert_eq!(
            apply(&TextOp::EndsWith {
                text: owned("hi"),
                suffix: owned("world"),
            }),
            TextOutput::Flag(false)
        );
    }
}
