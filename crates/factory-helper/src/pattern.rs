//! Pattern expansion for restricted regex-like strings and `#`/`?` templates.
//!
//! [`regexify`] rewrites a pattern in fixed stages, each feeding the next:
//!
//! 1. strip one leading `/` and `^` and one trailing `$` and `/`;
//! 2. normalise `{n}` to `{n,n}` and `?` to `{0,1}`;
//! 3. repeat bracket classes, groups, and single (possibly escaped)
//!    characters carrying a `{lo,hi}` suffix a sampled number of times;
//! 4. replace each `(a|b|c)` group with one alternative;
//! 5. replace each `[...]` class with one character from its expanded set;
//! 6. replace every `\d` with a digit and every `\w` with a letter.
//!
//! Wildcards, unbounded `{n,}` ranges, lookaround, and nested groups are not
//! recognised and pass through the stages as best they can. A repetition
//! that could produce more than 1 MiB of text is not expanded.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::random::RandomSource;

const DIGITS: &str = "0123456789";
const NONZERO_DIGITS: &str = "123456789";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// Upper bound on the text one `{lo,hi}` repetition may produce; larger
/// repetitions are left as written.
const MAX_REPEAT_BYTES: usize = 1 << 20;

macro_rules! static_regex {
    ($name:ident, $pattern:literal) => {
        fn $name() -> &'static Regex {
            static CELL: OnceLock<Regex> = OnceLock::new();
            CELL.get_or_init(|| {
                Regex::new($pattern).unwrap_or_else(|error| {
                    panic!("pattern regex {} failed to compile: {error}", $pattern)
                })
            })
        }
    };
}

static_regex!(leading_anchor, r"^/?\^?");
static_regex!(trailing_anchor, r"\$?/?$");
static_regex!(exact_count, r"\{(\d+)\}");
static_regex!(class_repeat, r"(\[[^\]]+\])\{(\d+),(\d+)\}");
static_regex!(group_repeat, r"(\([^\)]+\))\{(\d+),(\d+)\}");
static_regex!(char_repeat, r"(\\?.)\{(\d+),(\d+)\}");
static_regex!(alternation, r"\((.*?)\)");
static_regex!(char_class, r"\[([^\]]+)\]");
static_regex!(digit_escape, r"\\d");
static_regex!(word_escape, r"\\w");

/// Generates one string matching a restricted regex-like pattern.
///
/// Unsupported constructs are not validated; they produce best-effort output
/// rather than an error.
///
/// # Example
///
/// ```
/// use factory_helper::{RandomSource, regexify};
///
/// let mut random = RandomSource::from_seed(42);
/// let code = regexify(r"/^[A-C]{2}-\d{3}$/", &mut random);
///
/// assert_eq!(code.len(), 6);
/// assert!(code[..2].chars().all(|c| ('A'..='C').contains(&c)));
/// assert!(code[3..].chars().all(|c| c.is_ascii_digit()));
/// ```
pub fn regexify(pattern: &str, random: &mut RandomSource) -> String {
    let without_start = leading_anchor().replace(pattern, "");
    let unanchored = trailing_anchor().replace(&without_start, "");

    let normalised = exact_count()
        .replace_all(&unanchored, "{${1},${1}}")
        .replace('?', "{0,1}");

    let classes_repeated = repeat_tokens(class_repeat(), &normalised, random);
    let groups_repeated = repeat_tokens(group_repeat(), &classes_repeated, random);
    let chars_repeated = repeat_tokens(char_repeat(), &groups_repeated, random);

    let alternatives_chosen = alternation()
        .replace_all(&chars_repeated, |caps: &Captures<'_>| {
            choose_alternative(capture(caps, 1), random)
        })
        .into_owned();

    let classes_chosen = char_class()
        .replace_all(&alternatives_chosen, |caps: &Captures<'_>| {
            choose_from_class(capture(caps, 1), random)
        })
        .into_owned();

    let digits_filled = digit_escape()
        .replace_all(&classes_chosen, |_: &Captures<'_>| {
            sample_char(DIGITS, random).to_string()
        })
        .into_owned();

    word_escape()
        .replace_all(&digits_filled, |_: &Captures<'_>| {
            sample_char(LETTERS, random).to_string()
        })
        .into_owned()
}

/// Replaces every `#` with a random digit.
///
/// The first `#` in the string always becomes a non-zero digit, wherever it
/// appears; every later `#` may become any digit.
///
/// # Example
///
/// ```
/// use factory_helper::{RandomSource, numerify};
///
/// let mut random = RandomSource::from_seed(7);
/// let phone = numerify("###-##", &mut random);
///
/// assert_eq!(phone.len(), 6);
/// assert_ne!(phone.chars().next(), Some('0'));
/// ```
pub fn numerify(template: &str, random: &mut RandomSource) -> String {
    let mut seen_first = false;
    template
        .chars()
        .map(|c| {
            if c != '#' {
                return c;
            }
            if seen_first {
                sample_char(DIGITS, random)
            } else {
                seen_first = true;
                sample_char(NONZERO_DIGITS, random)
            }
        })
        .collect()
}

/// Replaces every `?` with a random uppercase letter.
pub fn letterify(template: &str, random: &mut RandomSource) -> String {
    template
        .chars()
        .map(|c| if c == '?' { sample_char(UPPERCASE, random) } else { c })
        .collect()
}

/// Applies [`numerify`] and then [`letterify`].
pub fn bothify(template: &str, random: &mut RandomSource) -> String {
    let numbered = numerify(template, random);
    letterify(&numbered, random)
}

fn repeat_tokens(rule: &Regex, text: &str, random: &mut RandomSource) -> String {
    rule.replace_all(text, |caps: &Captures<'_>| {
        let bounds = (
            capture(caps, 2).parse::<usize>(),
            capture(caps, 3).parse::<usize>(),
        );
        let token = capture(caps, 1);
        let (Ok(low), Ok(high)) = bounds else {
            return capture(caps, 0).to_owned();
        };
        match token.len().checked_mul(low.max(high)) {
            Some(widest) if widest <= MAX_REPEAT_BYTES => {
                token.repeat(random.count_in_range(low, high))
            }
            _ => capture(caps, 0).to_owned(),
        }
    })
    .into_owned()
}

fn choose_alternative(body: &str, random: &mut RandomSource) -> String {
    let stripped: String = body.chars().filter(|c| *c != '(' && *c != ')').collect();
    let mut alternatives: Vec<&str> = stripped.split('|').collect();
    // Trailing empty alternatives are not candidates.
    while alternatives.last().is_some_and(|last| last.is_empty()) {
        alternatives.pop();
    }
    random
        .sample_one(&alternatives)
        .map_or_else(String::new, |choice| (*choice).to_owned())
}

fn choose_from_class(body: &str, random: &mut RandomSource) -> String {
    let members = expand_class(body);
    random
        .sample_one(&members)
        .map_or_else(String::new, char::to_string)
}

/// Expands `x-y` ranges between word characters into their full members.
fn expand_class(body: &str) -> Vec<char> {
    let chars: Vec<char> = body.chars().collect();
    let mut members = Vec::with_capacity(chars.len());
    let mut rest = chars.as_slice();

    while let Some((&first, tail)) = rest.split_first() {
        match tail {
            [dash, last, remaining @ ..]
                if *dash == '-' && is_word_char(first) && is_word_char(*last) =>
            {
                members.extend(first..=*last);
                rest = remaining;
            }
            _ => {
                members.push(first);
                rest = tail;
            }
        }
    }

    members
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn capture<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn sample_char(alphabet: &str, random: &mut RandomSource) -> char {
    let index = random.next_int(alphabet.len());
    alphabet.chars().nth(index).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;

    const SAMPLES: usize = 300;

    #[fixture]
    fn random() -> RandomSource {
        RandomSource::from_seed(2026)
    }

    fn samples(pattern: &str, random: &mut RandomSource) -> HashSet<String> {
        (0..SAMPLES).map(|_| regexify(pattern, random)).collect()
    }

    #[rstest]
    fn exact_repetition_is_fixed(mut random: RandomSource) {
        for _ in 0..SAMPLES {
            assert_eq!(regexify("A{2,2}", &mut random), "AA");
            assert_eq!(regexify("A{3}", &mut random), "AAA");
        }
    }

    #[rstest]
    fn optional_token_may_vanish(mut random: RandomSource) {
        let seen = samples("A{0,1}", &mut random);
        let expected: HashSet<String> = ["", "A"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(seen, expected);
    }

    #[rstest]
    fn question_mark_is_optional(mut random: RandomSource) {
        let seen = samples("AB?", &mut random);
        let expected: HashSet<String> = ["A", "AB"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(seen, expected);
    }

    #[rstest]
    fn alternation_picks_one_branch(mut random: RandomSource) {
        let seen = samples("(cat|dog)", &mut random);
        let expected: HashSet<String> = ["cat", "dog"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(seen, expected);
    }

    #[rstest]
    fn class_range_picks_one_member(mut random: RandomSource) {
        let seen = samples("[A-C]", &mut random);
        let expected: HashSet<String> = ["A", "B", "C"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(seen, expected);
    }

    #[rstest]
    fn class_mixes_ranges_and_literals(mut random: RandomSource) {
        let seen = samples("[A-BX_]", &mut random);
        let expected: HashSet<String> =
            ["A", "B", "X", "_"].iter().map(|s| (*s).to_owned()).collect();
        assert_eq!(seen, expected);
    }

    #[rstest]
    #[case::digits(r"\d{4}", 4, |c: char| c.is_ascii_digit())]
    #[case::letters(r"\w{5}", 5, |c: char| c.is_ascii_alphabetic())]
    #[case::class(r"[0-9]{3}", 3, |c: char| c.is_ascii_digit())]
    fn escapes_and_classes_repeat(
        mut random: RandomSource,
        #[case] pattern: &str,
        #[case] length: usize,
        #[case] predicate: fn(char) -> bool,
    ) {
        for _ in 0..50 {
            let value = regexify(pattern, &mut random);
            assert_eq!(value.chars().count(), length, "{value}");
            assert!(value.chars().all(predicate), "{value}");
        }
    }

    #[rstest]
    fn anchors_and_slashes_are_stripped(mut random: RandomSource) {
        assert_eq!(regexify("/^abc$/", &mut random), "abc");
        assert_eq!(regexify("^abc$", &mut random), "abc");
    }

    #[rstest]
    fn repeated_group_repeats_before_choosing(mut random: RandomSource) {
        for _ in 0..50 {
            let value = regexify("(ab|cd){2}", &mut random);
            assert_eq!(value.len(), 4, "{value}");
            assert!(
                value.chars().all(|c| "abcd".contains(c)),
                "unexpected output {value}"
            );
        }
    }

    #[rstest]
    fn uk_postcode_pattern_has_expected_shape(mut random: RandomSource) {
        let pattern = r"/^[A-PR-UWYZ0-9][A-HK-Y0-9][AEHMNPRTVXY0-9]?[ABEHMNPRVWXY0-9]? {1,2}[0-9][ABD-HJLN-UW-Z]{2}$/";
        let shape = Regex::new(
            r"^[A-PR-UWYZ0-9][A-HK-Y0-9][AEHMNPRTVXY0-9]?[ABEHMNPRVWXY0-9]? {1,2}[0-9][ABD-HJLN-UW-Z]{2}$",
        )
        .expect("valid postcode regex");
        for _ in 0..SAMPLES {
            let value = regexify(pattern, &mut random);
            assert!(shape.is_match(&value), "unexpected postcode {value}");
            assert!((6..=9).contains(&value.chars().count()), "{value}");
        }
    }

    #[rstest]
    #[case::overflowing_bound("A{1,99999999999999999}")]
    #[case::overflowing_token(r"\d{18446744073709551615,1}")]
    #[case::oversized_class("[A-Z]{1,2000000}")]
    fn oversized_repetition_is_left_unchanged(mut random: RandomSource, #[case] pattern: &str) {
        let value = regexify(pattern, &mut random);
        assert!(value.contains('{'), "{value}");
    }

    #[rstest]
    fn unsupported_wildcard_passes_through(mut random: RandomSource) {
        assert_eq!(regexify("a.b", &mut random), "a.b");
    }

    #[rstest]
    fn numerify_keeps_first_digit_nonzero(mut random: RandomSource) {
        for _ in 0..SAMPLES {
            let value = numerify("###-##", &mut random);
            let chars: Vec<char> = value.chars().collect();
            assert_eq!(chars.len(), 6);
            assert!(chars.first().is_some_and(|c| ('1'..='9').contains(c)), "{value}");
            assert_eq!(chars.get(3), Some(&'-'));
            assert!(
                value.chars().filter(|c| *c != '-').all(|c| c.is_ascii_digit()),
                "{value}"
            );
        }
    }

    #[rstest]
    fn numerify_first_rule_applies_to_first_hash_anywhere(mut random: RandomSource) {
        for _ in 0..SAMPLES {
            let value = numerify("ID-#", &mut random);
            assert!(value.starts_with("ID-"));
            assert_ne!(value.chars().last(), Some('0'), "{value}");
        }
    }

    #[rstest]
    fn numerify_later_digits_include_zero(mut random: RandomSource) {
        let seen_zero = (0..SAMPLES)
            .map(|_| numerify("##", &mut random))
            .any(|value| value.ends_with('0'));
        assert!(seen_zero);
    }

    #[rstest]
    fn letterify_uses_uppercase_letters(mut random: RandomSource) {
        for _ in 0..SAMPLES {
            let value = letterify("??-??", &mut random);
            let chars: Vec<char> = value.chars().collect();
            assert_eq!(chars.len(), 5);
            assert_eq!(chars.get(2), Some(&'-'));
            assert!(
                value.chars().filter(|c| *c != '-').all(|c| c.is_ascii_uppercase()),
                "{value}"
            );
        }
    }

    #[rstest]
    fn bothify_fills_digits_and_letters(mut random: RandomSource) {
        let value = bothify("#?#?", &mut random);
        let chars: Vec<char> = value.chars().collect();
        assert_eq!(chars.len(), 4);
        assert!(chars.first().is_some_and(|c| ('1'..='9').contains(c)));
        assert!(chars.get(1).is_some_and(char::is_ascii_uppercase));
        assert!(chars.get(2).is_some_and(char::is_ascii_digit));
        assert!(chars.get(3).is_some_and(char::is_ascii_uppercase));
    }

    #[test]
    fn expand_class_handles_trailing_dash() {
        assert_eq!(expand_class("a-"), vec!['a', '-']);
        assert_eq!(expand_class("A-C-E"), vec!['A', 'B', 'C', '-', 'E']);
    }

    #[test]
    fn same_seed_expands_identically() {
        let mut first = RandomSource::from_seed(5);
        let mut second = RandomSource::from_seed(5);
        let pattern = r"[A-Z]{3}-\d{2,4}(x|y|z)";

        for _ in 0..20 {
            assert_eq!(regexify(pattern, &mut first), regexify(pattern, &mut second));
        }
    }
}
