use std::env;
use std::process::ExitCode;

mod cli;
mod pass;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    cli::run(&args)
}
