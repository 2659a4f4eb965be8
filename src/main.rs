mod bit;
mod field;
mod table;

use clap::Parser;

use std::num::IntErrorKind;
use std::process;

/// Break a 32-bit instruction word into its encoding fields.
#[derive(Parser)]
struct Args {
    /// The word to decode, as hexadecimal with or without a leading '0x'.
    word: String,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
enum InputError {
    #[error("'{0}' is not a valid hexadecimal number")]
    InvalidHex(String),
    #[error("'{0}' doesn't fit in 32 bits")]
    OutOfRange(String),
}

/// Parse a hexadecimal instruction word. A '0x' or '0X' prefix is allowed
/// but not required.
fn parse_word(input: &str) -> Result<u32, InputError> {
    let input = input.trim();
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    u32::from_str_radix(digits, 16).map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => InputError::OutOfRange(input.into()),
        _ => InputError::InvalidHex(input.into()),
    })
}

fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Missing or malformed invocations must exit with code 1, while
            // '--help' and friends still exit with 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    let word = match parse_word(&args.word) {
        Ok(word) => word,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    log::debug!("decoding {word:#010x}");

    for line in table::render(word) {
        println!("{line}");
    }
}

#[test]
fn test_parse_word() {
    assert_eq!(Ok(0x93), parse_word("0x93"));
    assert_eq!(Ok(0x93), parse_word("0X93"));
    assert_eq!(Ok(0xabc), parse_word("abc"));
    assert_eq!(parse_word("abc"), parse_word("0xabc"));
    assert_eq!(Ok(u32::MAX), parse_word("0xffffffff"));
    assert_eq!(Ok(0x93), parse_word(" 0x93 "));
}

#[test]
fn test_parse_word_rejects_garbage() {
    for input in ["xyz", "", "0x", "0x12g4", "12 34"] {
        assert_eq!(
            Err(InputError::InvalidHex(input.trim().into())),
            parse_word(input)
        );
    }
}

#[test]
fn test_parse_word_rejects_wide_values() {
    for input in ["0x1ffffffff", "0x100000000", "ffffffffffffffffff"] {
        assert_eq!(Err(InputError::OutOfRange(input.into())), parse_word(input));
    }
}
