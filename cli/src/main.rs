mod commands;
mod terminal;

use commands::{CommandLine, Commands, basic, calc, demo, text};
use scaffold_common::log::Logger;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    let _guard = logging::init_logging(&cfg)?;
    print::banner(cfg.quiet);

    match commands.command {
        Commands::Demo => {
            print::header("full walkthrough", cfg.quiet);
            demo::demo(&Logger::new("MainApp"))?;
        }
        Commands::Basic => {
            print::header("basic calculator", cfg.quiet);
            basic::basic(&Logger::new("BasicExample"))?;
        }
        Commands::Calc { op, a, b } => {
            print::header("calculator", cfg.quiet);
            calc::calc(op, a, b, &cfg)?;
        }
        Commands::Text { op } => {
            print::header("text", cfg.quiet);
            text::run(op, &cfg)?;
        }
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
