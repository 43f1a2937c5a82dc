extern crate rgx;
extern crate rgx_nfa;

use std::io::{self, BufRead};
use clap::Parser;
use rgx::Regex;
use rgx_nfa::Nfa;

#[derive(Parser, Debug)]
#[command(name = "rgx_examples")]
#[command(about = "Shows how patterns match; without a pattern prints the built-in demos")]
struct Args {
    /// Pattern to match with
    pattern: Option<String>,

    /// Inputs to match against, read line by line from stdin when missing
    inputs: Vec<String>,
}

/**
 * Built-in demos.
 */

fn repeated_alternation_demo() {
    // Same automaton as `(foo|bar)*`, assembled by hand
    let nfa = Nfa::sequence(Nfa::zero_or_many(Nfa::alternation("foo", "bar")), "");
    let strings = [
        "foo", "bar", "foobar", "farboo", "boofar", "barfoo", "foofoobarfoo1", "foofoobarfoo",
    ];

    println!("PATTERN : (foo|bar)*");
    for s in &strings {
        println!("{}\t:\t{}", s, nfa.matches(s, true));
    }
}

fn class_subtraction_demo() -> rgx::Result<()> {
    let subtracted = Regex::new("[a-z-[aeiou]]")?;
    let intersected = Regex::new("[a-z&&[^aeiou]]")?;
    let explicit = Regex::new("[b-df-hj-np-tv-z]")?;

    println!();
    println!("{:<20}{}", "PATTERN", "ACCEPTS");
    for rx in &[subtracted, intersected, explicit] {
        let accepted: String = ('a'..='z').filter(|c| rx.is_match_whole_string(&c.to_string())).collect();
        println!("{:<20}{}", rx.pattern(), accepted);
    }
    Ok(())
}

/**
 * Matching user input.
 */

/// A line with a caret under every character offset where a match starts.
fn caret_line(rx: &Regex, input: &str) -> String {
    let starts = rx.match_starts(input);
    (0..=input.chars().count())
        .map(|i| if starts.contains(&i) { '^' } else { ' ' })
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn show_match(rx: &Regex, input: &str) {
    println!("{:?}\twhole string: {}\tanywhere: {}",
        input, rx.is_match_whole_string(input), rx.is_match_anywhere(input));
    println!(" {}", input);
    println!(" {}", caret_line(rx, input));
}

fn run(args: Args) -> rgx::Result<()> {
    let pattern = match args.pattern {
        Some(pattern) => pattern,
        None => {
            repeated_alternation_demo();
            return class_subtraction_demo();
        },
    };

    let rx = Regex::new(&pattern)?;
    println!("PATTERN : {}", rx);

    if args.inputs.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => show_match(&rx, &line),
                Err(err) => {
                    log::error!("could not read stdin: {}", err);
                    break;
                },
            }
        }
    }
    else {
        for input in &args.inputs {
            show_match(&rx, input);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod examples_tests {
    use super::*;

    #[test]
    fn carets_mark_match_starts() {
        let rx = Regex::new("ab").unwrap();
        assert_eq!(caret_line(&rx, "abxab"), "^  ^");
        assert_eq!(caret_line(&rx, "xyz"), "");
    }

    #[test]
    fn carets_past_the_end() {
        let rx = Regex::new("$").unwrap();
        assert_eq!(caret_line(&rx, "ab"), "  ^");
    }
}
