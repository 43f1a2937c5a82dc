
//! Agreement with the `regex` crate on the syntax both engines share.

use rgx::Regex;

const PATTERNS: &[&str] = &[
    "a",
    "a*",
    "a+b",
    "ab?c",
    "(foo|bar)*",
    "a|b*|c",
    "a|b+|c",
    "(a|b)*abb",
    "[a-c]+",
    "[^a-c]",
    "x.y",
    "^ab",
    "ab$",
    "^(a|b)$",
    "(a*)*b",
    "((a|b)+)?c",
    "[0-9]+",
    r"\d\d",
    r"\D",
    "a()b",
    "(|a)b",
    r"a\*",
    "(0|(1(01*0)*1))*",
    "[a-z&&[^aeiou]]+",
    "(ab*)*",
    "(ab+)?",
    "(a+b)*",
    "(a(b|c)*)*",
    "(ab*)*c",
    "((.)+(a|b))*",
];

const INPUTS: &[&str] = &[
    "", "a", "b", "c", "d", "ab", "ba", "bb", "bc", "abb", "aabb", "babb", "abc", "ac", "aac",
    "foo", "foobar", "barfoo", "fooba", "xay", "xy", "12", "123", "a*", "ab*",
    "0", "11", "110", "111", "1001", "bcd", "xyz", "aeiou",
];

fn oracle(pattern: &str, whole: bool) -> regex::Regex {
    let pattern = if whole { format!("^(?:{})$", pattern) } else { pattern.to_string() };
    regex::Regex::new(&pattern).unwrap()
}

#[test]
fn agrees_on_whole_string_matches() {
    for pattern in PATTERNS {
        let rx = Regex::new(pattern).unwrap();
        let expected = oracle(pattern, true);
        for input in INPUTS {
            assert_eq!(rx.is_match_whole_string(input), expected.is_match(input),
                "`{}` against the whole of {:?}", pattern, input);
        }
    }
}

#[test]
fn agrees_on_matches_anywhere() {
    for pattern in PATTERNS {
        let rx = Regex::new(pattern).unwrap();
        let expected = oracle(pattern, false);
        for input in INPUTS {
            assert_eq!(rx.is_match_anywhere(input), expected.is_match(input),
                "`{}` anywhere in {:?}", pattern, input);
        }
    }
}

#[test]
fn nested_repetitions_terminate() {
    for pattern in &["(a*)*", "((a*)*)*", "(a?)*", "(a*)+", "((a|)*)*b", "(()*)*"] {
        let rx = Regex::new(pattern).unwrap();
        let expected = oracle(pattern, true);
        for input in &["", "a", "aaaaaaaaaa", "aaaaaaaaab", "b"] {
            assert_eq!(rx.is_match_whole_string(input), expected.is_match(input),
                "`{}` against the whole of {:?}", pattern, input);
        }
    }
}
