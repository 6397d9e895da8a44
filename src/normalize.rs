//! Fixed text-normalization pipeline for raw tweets.
//!
//! The pipeline is an ordered list of substitution rules applied
//! sequentially; each rule operates on the previous rule's output. URL and
//! mention removal run before the alphanumeric collapse because the collapse
//! erases the very characters (`@`, `.`, `:`, `/`) those rules anchor on.
//! The trailing collapse rules are redundant given the earlier ones but are
//! part of the documented contract and still run; tests pin the full order.

use std::sync::LazyLock;

use regex::Regex;

/// A single substitution step: every match of `pattern` becomes
/// `replacement`.
struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        Rule {
            name: "strip_urls",
            pattern: Regex::new(r"(www\.[^\s]+)|(https?://[^\s]+)").unwrap(),
            replacement: " ",
        },
        Rule {
            name: "strip_mentions",
            pattern: Regex::new(r"@\w+").unwrap(),
            replacement: "",
        },
        Rule {
            // Whole-word only; input is already lowercased at this point.
            name: "strip_retweet_marker",
            pattern: Regex::new(r"\brt\b").unwrap(),
            replacement: "",
        },
        Rule {
            name: "collapse_non_alphanumeric",
            pattern: Regex::new(r"[^0-9a-zA-Z]+").unwrap(),
            replacement: " ",
        },
        Rule {
            name: "collapse_non_word",
            pattern: Regex::new(r"\W+").unwrap(),
            replacement: " ",
        },
        Rule {
            name: "collapse_whitespace",
            pattern: Regex::new(r"\s+").unwrap(),
            replacement: " ",
        },
        Rule {
            name: "collapse_spaces",
            pattern: Regex::new(r" +").unwrap(),
            replacement: " ",
        },
    ]
});

/// Normalize raw tweet text. Total function: any input maps to a (possibly
/// empty) cleaned string.
///
/// Lowercases, strips URL-like tokens, `@`-mentions and standalone `rt`
/// markers, collapses every run of non-alphanumeric characters to a single
/// space and trims. Idempotent: a second pass finds nothing left to remove.
pub fn normalize(text: &str) -> String {
    let mut text = text.to_lowercase();
    for rule in RULES.iter() {
        text = rule
            .pattern
            .replace_all(&text, rule.replacement)
            .into_owned();
    }
    text.trim().to_string()
}
