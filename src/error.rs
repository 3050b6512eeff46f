use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid test case input in '{input}': {message}")]
#[diagnostic(
    code(lcg_cycle::input_parse_error),
    help("Input must be a test case count followed by groups of four integers: a c m k")
)]
pub struct InputParseError {
    pub input: String,
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("{message}")]
    pub span: SourceSpan,
}

#[derive(Error, Debug, Diagnostic)]
pub enum LcgError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(lcg_cycle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    InputParse(Box<InputParseError>),

    #[error("Test case count must not be negative, got {count}")]
    #[diagnostic(
        code(lcg_cycle::negative_case_count),
        help("The first integer of the input is the number of test cases")
    )]
    NegativeCaseCount { count: i64 },

    #[error("Modulus must not be zero")]
    #[diagnostic(
        code(lcg_cycle::zero_modulus),
        help("The recurrence (a * x + c) mod m is undefined for m = 0")
    )]
    ZeroModulus,

    #[error("Arithmetic overflow computing {a} * {x} + {c}")]
    #[diagnostic(
        code(lcg_cycle::arithmetic_overflow),
        help("Use --overflow exact to compute without truncation, or --overflow wrapping")
    )]
    ArithmeticOverflow { a: i64, x: i64, c: i64 },

    #[error("Sequence exceeded the step limit of {limit} elements")]
    #[diagnostic(
        code(lcg_cycle::step_limit_exceeded),
        help("Raise or remove --max-steps; large moduli need up to m steps")
    )]
    StepLimitExceeded { limit: usize },

    #[error("Generator parameters have not been set")]
    #[diagnostic(
        code(lcg_cycle::unconfigured),
        help("Call set_parameters before generating or measuring a sequence")
    )]
    Unconfigured,

    #[error("JSON serialization error")]
    #[diagnostic(
        code(lcg_cycle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(lcg_cycle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(lcg_cycle::io_error),
        help("Check that the input stream is readable and the output is writable")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(lcg_cycle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
