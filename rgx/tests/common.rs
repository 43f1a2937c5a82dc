
use rgx::Regex;

#[allow(dead_code)]
pub fn assert_whole(pattern: &str, cases: &[(&str, bool)]) {
    let rx = Regex::new(pattern).unwrap();
    for (input, expected) in cases {
        assert_eq!(rx.is_match_whole_string(input), *expected,
            "`{}` against the whole of {:?}", pattern, input);
    }
}

#[allow(dead_code)]
pub fn assert_anywhere(pattern: &str, cases: &[(&str, bool)]) {
    let rx = Regex::new(pattern).unwrap();
    for (input, expected) in cases {
        assert_eq!(rx.is_match_anywhere(input), *expected,
            "`{}` anywhere in {:?}", pattern, input);
    }
}

/// The single-character strings over `'a'..='z'` accepted by the pattern.
#[allow(dead_code)]
pub fn accepted_lowercase(pattern: &str) -> String {
    let rx = Regex::new(pattern).unwrap();
    ('a'..='z').filter(|c| rx.is_match_whole_string(&c.to_string())).collect()
}
