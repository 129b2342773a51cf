use thiserror::Error;

use super::CliFlags;
use crate::pass::MIN_LENGTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number for {flag}: {value}")]
    InvalidNumber { flag: String, value: String },
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
    #[error("Min length must be greater than or equal to {}", MIN_LENGTH)]
    LengthBelowFloor,
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-chars" => flags.chars = string_value(args, &mut i)?,
            "-length" => flags.length = numeric_value(args, &mut i)?,
            "-minUpper" => flags.min_upper = numeric_value(args, &mut i)?,
            "-minLower" => flags.min_lower = numeric_value(args, &mut i)?,
            "-minDigit" => flags.min_digit = numeric_value(args, &mut i)?,
            "-minSpecial" => flags.min_special = numeric_value(args, &mut i)?,
            "-maxRepeat" => flags.max_repeat = numeric_value(args, &mut i)?,
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    // Config errors are caught here, before the generator ever runs.
    if !flags.help && !flags.version && flags.length < MIN_LENGTH {
        return Err(ParseError::LengthBelowFloor);
    }

    Ok(flags)
}

fn string_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    let flag = &args[*i];
    *i += 1;
    if *i >= args.len() {
        return Err(ParseError::MissingValue(flag.clone()));
    }
    Ok(args[*i].trim().to_string())
}

fn numeric_value(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    let flag = args[*i].clone();
    let value = string_value(args, i)?;
    value.parse().map_err(|_| ParseError::InvalidNumber {
        flag,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_yields_defaults() {
        let flags = parse(&argv(&[])).unwrap();
        assert_eq!(flags.chars, "AaDS");
        assert_eq!(flags.length, 16);
        assert_eq!(flags.min_upper, 3);
        assert_eq!(flags.min_lower, 3);
        assert_eq!(flags.min_digit, 3);
        assert_eq!(flags.min_special, 3);
        assert_eq!(flags.max_repeat, 1);
    }

    #[test]
    fn parsed_flags_without_args_equal_the_default_flags() {
        assert_eq!(parse(&argv(&[])), Ok(CliFlags::default()));
    }

    #[test]
    fn all_flags_parse() {
        let flags = parse(&argv(&[
            "-chars",
            "AD",
            "-length",
            "20",
            "-minUpper",
            "1",
            "-minLower",
            "0",
            "-minDigit",
            "2",
            "-minSpecial",
            "0",
            "-maxRepeat",
            "4",
        ]))
        .unwrap();
        assert_eq!(flags.chars, "AD");
        assert_eq!(flags.length, 20);
        assert_eq!(flags.min_upper, 1);
        assert_eq!(flags.min_lower, 0);
        assert_eq!(flags.min_digit, 2);
        assert_eq!(flags.min_special, 0);
        assert_eq!(flags.max_repeat, 4);
    }

    #[test]
    fn length_below_floor_is_rejected() {
        assert_eq!(
            parse(&argv(&["-length", "5"])),
            Err(ParseError::LengthBelowFloor)
        );
    }

    #[test]
    fn length_at_floor_is_accepted() {
        let flags = parse(&argv(&["-length", "6"])).unwrap();
        assert_eq!(flags.length, 6);
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(
            parse(&argv(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".to_string()))
        );
    }

    #[test]
    fn non_numeric_value_is_rejected() {
        assert_eq!(
            parse(&argv(&["-minDigit", "three"])),
            Err(ParseError::InvalidNumber {
                flag: "-minDigit".to_string(),
                value: "three".to_string()
            })
        );
    }

    #[test]
    fn negative_value_is_rejected() {
        assert!(matches!(
            parse(&argv(&["-maxRepeat", "-1"])),
            Err(ParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn missing_value_is_rejected() {
        assert_eq!(
            parse(&argv(&["-length"])),
            Err(ParseError::MissingValue("-length".to_string()))
        );
    }

    #[test]
    fn numeric_values_are_trimmed() {
        let flags = parse(&argv(&["-length", " 12 "])).unwrap();
        assert_eq!(flags.length, 12);
    }
}
