
extern crate rgx;
extern crate rand;

mod rnd;
mod str_gen;
mod fuzz_gen;

use clap::Parser;
use rgx::Regex;
use str_gen::*;
use fuzz_gen::*;

const CHARSET: &str = "abc";

#[derive(Parser, Debug)]
#[command(name = "rgx_fuzzer")]
#[command(about = "Compares rgx against the regex crate on random patterns and inputs")]
struct Args {
    /// Seed of the generator, taken from the clock when missing
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of patterns to try
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Maximum nesting of generated patterns
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Maximum length of the random inputs
    #[arg(long, default_value_t = 8)]
    input_len: usize,

    /// Inputs tried per pattern
    #[arg(long, default_value_t = 8)]
    inputs: usize,
}

/// One disagreement between the two engines.
#[derive(Debug)]
struct Mismatch {
    pattern: String,
    input: String,
    whole_string: bool,
    expected: bool,
}

fn pattern_generator() -> RandomPattern {
    let mut gen = RandomPattern::new();
    gen.add(LiteralPattern::with_charset(CHARSET));
    gen.add(LiteralPattern::with_charset(CHARSET));
    gen.add(ClassPattern::with_charset(CHARSET));
    gen.add(MetaPattern::new());
    gen.add(SequencePattern::new());
    gen.add(AlternationPattern::new());
    gen.add(RepetitionPattern::new());
    gen
}

fn input_generator(rx: &Regex, args: &Args) -> RandomString {
    let mut gen = RandomString::new();
    gen.add(RandomStringGenerator::with_len_and_charset(0..(args.input_len + 1), CHARSET));
    gen.add(PatternStringGenerator::with_charset(rx.ast().clone(), CHARSET, 3));
    gen
}

/// Runs one pattern through both engines. Patterns the oracle rejects are
/// skipped with `Ok(None)`.
fn fuzz_pattern(pattern: &str, args: &Args) -> Result<Option<Vec<Mismatch>>, rgx::Error> {
    let whole_oracle = match regex::Regex::new(&format!("^(?:{})$", pattern)) {
        Ok(rx) => rx,
        Err(err) => {
            log::warn!("oracle rejected `{}`: {}", pattern, err);
            return Ok(None);
        },
    };
    let anywhere_oracle = match regex::Regex::new(pattern) {
        Ok(rx) => rx,
        Err(err) => {
            log::warn!("oracle rejected `{}`: {}", pattern, err);
            return Ok(None);
        },
    };

    let rx = Regex::new(pattern)?;
    let inputs = input_generator(&rx, args);

    let mut mismatches = Vec::new();
    for _ in 0..args.inputs {
        let input = inputs.generate();
        log::trace!("`{}` on {:?}", pattern, input);

        let expected = whole_oracle.is_match(&input);
        if rx.is_match_whole_string(&input) != expected {
            mismatches.push(Mismatch{ pattern: pattern.into(), input: input.clone(), whole_string: true, expected });
        }

        let expected = anywhere_oracle.is_match(&input);
        if rx.is_match_anywhere(&input) != expected {
            mismatches.push(Mismatch{ pattern: pattern.into(), input, whole_string: false, expected });
        }
    }
    Ok(Some(mismatches))
}

/// Fuzzes `args.iterations` patterns from the current seed, returning the
/// number of failures.
fn run(args: &Args) -> usize {
    let patterns = pattern_generator();
    let mut skipped = 0;
    let mut failures = 0;

    for _ in 0..args.iterations {
        let pattern = patterns.generate(args.depth);
        match fuzz_pattern(&pattern, args) {
            Ok(Some(mismatches)) => {
                for m in &mismatches {
                    let mode = if m.whole_string { "whole string" } else { "anywhere" };
                    log::error!("`{}` on {:?} ({}): expected {}", m.pattern, m.input, mode, m.expected);
                }
                failures += mismatches.len();
            },
            Ok(None) => skipped += 1,
            Err(err) => {
                log::error!("`{}` was rejected: {}", pattern, err);
                failures += 1;
            },
        }
    }

    println!("seed {}: {} patterns, {} skipped, {} failures",
        rnd::current_seed(), args.iterations, skipped, failures);
    failures
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rnd::seed_from_system_time);
    rnd::set_seed(seed);
    log::info!("fuzzing {} patterns with seed {}", args.iterations, rnd::current_seed());

    if run(&args) > 0 {
        std::process::exit(1);
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
