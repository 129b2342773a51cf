//! Command-line interface: flag parsing, help, and dispatch.

mod flags;
mod help;
mod parse;

pub use flags::CliFlags;
pub use parse::parse;

use std::process::ExitCode;

use crate::pass::{self, charset};

/// Exit status for usage errors.
const EXIT_USAGE: u8 = 1;
/// Exit status for generation failure (attempt budget exhausted).
const EXIT_GENERATION: u8 = 2;

/// Run the CLI end to end. Returns the process exit code.
pub fn run(args: &[String]) -> ExitCode {
    let flags = match parse(args) {
        Ok(flags) => flags,
        Err(e) => {
            eprintln!("{e}");
            help::print_usage();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    if flags.help {
        help::print_help();
        return ExitCode::SUCCESS;
    }
    if flags.version {
        println!("passgen {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let alphabet = charset::build(&flags.chars);
    let mut rng = rand::rng();

    match pass::generate(&alphabet, &flags.constraints(), &mut rng) {
        Ok(password) => {
            pass::output::write_line(password);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_GENERATION)
        }
    }
}
