pub mod basic;
pub mod calc;
pub mod demo;
pub mod text;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use scaffold_common::config::Config;

use calc::Operation;
use text::TextOp;

#[derive(Parser)]
#[command(name = "scaffold")]
#[command(about = "Arithmetic and text helpers, plus a guided demo.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Show more log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Show less decoration (-q hides headers, -qq prints bare results)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Also write every event to a daily rolling `app.log` in this directory
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through every arithmetic and text operation
    #[command(alias = "d")]
    Demo,
    /// Run the four basic operations on 10 and 3
    #[command(alias = "b")]
    Basic,
    /// Evaluate a single arithmetic operation
    #[command(alias = "c")]
    Calc {
        op: Operation,
        #[arg(allow_negative_numbers = true)]
        a: f64,
        /// Second operand, required by every operation except sqrt
        #[arg(allow_negative_numbers = true)]
        b: Option<f64>,
    },
    /// Apply a text transformation
    #[command(alias = "t")]
    Text {
        #[command(subcommand)]
        op: TextOp,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            level: Config::level_from_verbosity(self.verbose),
            log_dir: self.log_dir.clone(),
            no_color: self.no_color,
            quiet: self.quiet,
        }
    }
}
