
mod common;

use common::{assert_whole, accepted_lowercase};

#[test]
fn single_characters() {
    assert_whole("a", &[("a", true), ("a-andthemsome", false), ("b", false), ("", false)]);
}

#[test]
fn repetitions() {
    assert_whole("a+", &[("a", true), ("", false)]);
    assert_whole("a*", &[("", true), ("a", true), ("aaa", true), ("b", false)]);
    assert_whole("a*b", &[("aab", true), ("aac", false)]);
    assert_whole("ab?", &[("a", true), ("ab", true), ("abb", false)]);
}

#[test]
fn any_char() {
    assert_whole("a.c", &[("abc", true), ("adc", true), ("bdc", false)]);
}

#[test]
fn sequences() {
    assert_whole("abc", &[("abc", true), ("xbc", false), ("axc", false), ("abx", false)]);
}

#[test]
fn alternations() {
    assert_whole("a|b", &[("a", true), ("b", true)]);
    assert_whole("a|b*", &[("bbbb", true), ("a", true), ("bbbbb", true)]);
    assert_whole("a*|b", &[("aaaaa", true), ("b", true)]);
    assert_whole("(Fido|Dave)", &[("Fido", true), ("Dido", false)]);
    assert_whole("C|SQL|HtML", &[("SQL", true)]);
}

#[test]
fn alternation_with_star() {
    assert_whole("a|b*|c", &[
        ("bbbb", true), ("a", true), ("b", true), ("c", true), ("aa", false),
        ("bbbbbb", true), ("", true), ("cc", false),
    ]);
}

#[test]
fn alternation_with_plus() {
    assert_whole("a|b+|c", &[
        ("a", true), ("b", true), ("c", true), ("aa", false),
        ("bbbbbb", true), ("", false), ("cc", false),
    ]);
    assert_whole("a|bf+|c", &[("a", true), ("c", true), ("bf", true), ("bfffff", true), ("bfg", false)]);
}

#[test]
fn repeated_alternation() {
    assert_whole("(foo|bar)*", &[
        ("foo", true), ("bar", true), ("foobar", true), ("farboo", false), ("boofar", false),
        ("barfoo", true), ("foofoobarfoo1", false), ("foofoobarfoo", true), ("foobarfooX", false),
    ]);
}

#[test]
fn classes_with_repetition() {
    assert_whole("([a-z][a-z0-9]*,)+", &[("a5,b7,c9,", true)]);
    assert_whole("[a-z0-9]*", &[("a53j5j7j3", true), ("---", false)]);
    assert_whole("([a-c0-3])+", &[("abc123", true), ("abc1234", false), ("abcd123", false)]);
}

#[test]
fn anchors() {
    assert_whole("^a", &[("a", true)]);
    assert_whole("a$", &[("a", true)]);
    assert_whole("^a$", &[("a", true), ("ab", false)]);
}

#[test]
fn multiples_of_three_in_binary() {
    let rx = "(0|(1(01*0)*1))*";
    assert_whole(rx, &[
        ("0", true), ("00", true), ("11", true), ("000", true), ("011", true), ("110", true),
        ("0000", true), ("0011", true), ("0110", true), ("1001", true), ("1100", true), ("1111", true),
        ("1", false), ("10", false), ("100", false), ("111", false),
    ]);
}

#[test]
fn simple_classes() {
    assert_whole("[a-z]", &[("a", true)]);
    assert_whole("[b-z]", &[("a", false)]);
    assert_whole("[abc]", &[("a", true), ("b", true), ("c", true), ("d", false)]);
    assert_whole("[^c-e]", &[("b", true), ("d", false), ("f", true)]);
}

#[test]
fn class_intersection() {
    assert_eq!(accepted_lowercase("[a-c&&c-e]"), "c");
}

#[test]
fn class_subtraction() {
    assert_eq!(accepted_lowercase("[a-c-[b]]"), "ac");
}

#[test]
fn subtracted_consonants() {
    let consonants = accepted_lowercase("[b-df-hj-np-tv-z]");
    assert_eq!(consonants, "bcdfghjklmnpqrstvwxyz");
    assert_eq!(accepted_lowercase("[a-z-[aeiuo]]"), consonants);
}

#[test]
fn intersected_consonants() {
    assert_eq!(accepted_lowercase("[a-z&&[^aeiuo]]"), accepted_lowercase("[b-df-hj-np-tv-z]"));
}

#[test]
fn shortcut_classes() {
    assert_whole(r"\d", &[("0", true), ("9", true), ("a", false)]);
    assert_whole(r"\w", &[
        ("a", true), ("z", true), ("A", true), ("Z", true), ("0", true), ("9", true), (" ", false),
    ]);
    assert_whole(r"\s", &[(" ", true), ("\t", true), ("\r", true), ("\n", true), ("\x0C", true), ("a", false)]);
    assert_whole(r"\D+", &[("abc", true), ("a1c", false)]);
}

#[test]
fn escaped_backslash() {
    assert_whole(r"\\", &[("a", false), ("\\", true)]);
    assert_whole(r"[\\]", &[("a", false), ("\\", true)]);
    assert_whole(r"[[a\\]&&[\\]]", &[("a", false), ("\\", true)]);
}

#[test]
fn escaped_syntax_characters() {
    assert_whole(r"a\*", &[("a*", true), ("aa", false)]);
    assert_whole(r"\(\)", &[("()", true)]);
    assert_whole(r"a\.b", &[("a.b", true), ("axb", false)]);
}

#[test]
fn shortcuts_inside_classes() {
    assert_whole(r"[\d&&\w]", &[("0", true), ("9", true), ("a", false), ("z", false)]);
}

#[test]
fn unicode_escapes() {
    assert_whole(r"\u{41}", &[("A", true), ("a", false)]);
    assert_whole(r"[\u{41}-\u{5A}]+", &[
        ("ABCDEFGHIJKLMNOPQRSTUVWXYZ", true), ("abcdefghijklmnopqrstuvwxyz", false),
    ]);
    assert_whole(r"[\u{5A}-\\]+", &[("\x5a\x5b\x5c", true), ("\x5a\x5b\x5c\x5d", false)]);
}

#[test]
fn non_ascii_input() {
    assert_whole("é+", &[("ééé", true), ("e", false)]);
    assert_whole(r"[\u{3B1}-\u{3C9}]*", &[("λόγος", false), ("λογος", true)]);
}

#[test]
fn consonants_reject_everything_else() {
    let rx = rgx::Regex::new("[a-z-[aeiou]]").unwrap();
    for c in ('A'..='Z').chain('0'..='9').chain("aeiou".chars()) {
        assert!(!rx.is_match_whole_string(&c.to_string()), "{:?}", c);
    }
    assert!(!rx.is_match_whole_string(""));
    assert!(!rx.is_match_whole_string("bc"));
}
