use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::common::{FormatArgs, GeneratorArgs};

#[derive(Parser)]
#[command(
    name = "lcg-cycle",
    about = "🎲 Measure the cycle length of linear congruential generators",
    long_about = "lcg-cycle generates the sequence X(n+1) = (a * X(n) + c) mod m from the seed \
                  X(0) = k, stops at the first repeated value and reports the length of the \
                  repeating cycle, excluding any non-repeating prefix.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Measure the cycle length of every test case in the input
    ///
    /// Reads a test case count followed by that many groups of `a c m k`
    /// from stdin or a file, and prints one cycle length per line.
    #[command(
        long_about = "Measure every test case of a whitespace-separated input. The first integer \
                      is the number of test cases T, followed by T groups of four integers: the \
                      multiplier a, the increment c, the modulus m and the seed k. Each case is \
                      measured with a fresh generator and its cycle length is printed on its own \
                      line. A zero modulus yields a cycle length of 0."
    )]
    Measure {
        /// Read test cases from a file instead of stdin
        #[arg(short, long, value_name = "FILE", env = "LCG_CYCLE_INPUT")]
        input: Option<PathBuf>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        generator: GeneratorArgs,

        /// Include the generated sequence in human and JSON reports
        #[arg(long, env = "LCG_CYCLE_SHOW_SEQUENCE")]
        show_sequence: bool,
    },

    /// Trace the sequence of a single generator
    ///
    /// Generates the sequence for one parameter set and shows where the
    /// prefix ends and the cycle begins.
    #[command(
        allow_negative_numbers = true,
        long_about = "Generate and print the full sequence of one generator, split into its \
                      non-repeating prefix and its cycle. Useful for checking a single parameter \
                      set by hand."
    )]
    Trace {
        /// Multiplier
        #[arg(value_name = "A")]
        a: i64,

        /// Increment
        #[arg(value_name = "C")]
        c: i64,

        /// Modulus
        #[arg(value_name = "M")]
        m: i64,

        /// Seed
        #[arg(value_name = "K")]
        k: i64,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_TRACE_FORMAT,
            env = "LCG_CYCLE_TRACE_FORMAT"
        )]
        format: OutputFormat,

        #[command(flatten)]
        generator: GeneratorArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Human,
    Json,
}
