//! Usage and help listing.

use crate::pass::{DEFAULT_LENGTH, DEFAULT_MAX_REPEAT, DEFAULT_MIN_CHAR, MIN_LENGTH};

fn listing() -> String {
    format!(
        "Usage: passgen [options]

Options:
  -chars <str>       Chars to use. A - uppercase letter, a - lowercase letter,
                     D - digit, S - special. e.g. use 'AaDS' to use everything,
                     or use 'AD' to generate using only uppercase letters and
                     digits. By default, will use 'AaDS'
  -length <n>        Generated password length. Minimum length is {MIN_LENGTH}.
                     Default length is {DEFAULT_LENGTH}
  -minUpper <n>      Minimum number of uppercase letters. Default is {DEFAULT_MIN_CHAR}
  -minLower <n>      Minimum number of lowercase letters. Default is {DEFAULT_MIN_CHAR}
  -minDigit <n>      Minimum number of digits. Default is {DEFAULT_MIN_CHAR}
  -minSpecial <n>    Minimum number of special characters. Default is {DEFAULT_MIN_CHAR}
  -maxRepeat <n>     Any single char can repeat at most this number. Default is {DEFAULT_MAX_REPEAT}
  -h, --help         Print this help
  -v, --version      Print version"
    )
}

/// Print the help listing to stdout (for `-h`).
pub fn print_help() {
    println!("{}", listing());
}

/// Print the help listing to stderr (after a usage error).
pub fn print_usage() {
    eprintln!("{}", listing());
}
