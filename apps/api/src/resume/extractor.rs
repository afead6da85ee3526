//! Resume Field Extractor: best-effort name, email, and phone detection over plain text.
//!
//! Each field runs its own ordered list of patterns. The first pattern that produces
//! a match wins; later patterns are never consulted for that field, even if they
//! would give a "better" answer. This precedence is relied on by clients and must
//! not be reordered.
//!
//! Matching uses the `regex` crate, which guarantees linear-time search, so
//! adversarial uploads cannot trigger catastrophic backtracking.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Shortest accepted name, in characters (after whitespace cleanup).
const MIN_NAME_CHARS: usize = 3;
/// Longest accepted name, in characters (after whitespace cleanup).
const MAX_NAME_CHARS: usize = 49;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Priority order: North-American, international generic, bare 10-digit.
const PHONE_PATTERNS: [&str; 3] = [
    r"\+?1?[-.\s]?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
    r"\+?[0-9]{1,3}[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4}[-.\s]?[0-9]{3,4}",
    r"\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}",
];

/// Labelled name. Case-insensitive. The value may sit on the line after the label,
/// but the captured name itself never spans lines.
const NAME_LABEL_PATTERN: &str = r"(?:Name|Full Name|Candidate Name)[:\s]+([A-Za-z \t]{2,50})";
/// A line made of nothing but letters and blanks, e.g. a resume header.
const NAME_LINE_PATTERN: &str = r"^([A-Za-z \t]{2,50})[ \t]*$";
/// Two adjacent capitalized words anywhere in the text.
const NAME_TITLE_CASE_PATTERN: &str = r"([A-Z][a-z]+\s+[A-Z][a-z]+)";

/// Best-guess identity fields pulled from a resume. Every field is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// The compiled pattern set. Built once per process.
pub struct IdentityPatterns {
    email: Regex,
    phone: [Regex; 3],
    name: [Regex; 3],
}

static PATTERNS: LazyLock<Result<IdentityPatterns, regex::Error>> =
    LazyLock::new(IdentityPatterns::compile);

impl IdentityPatterns {
    pub fn compile() -> Result<Self, regex::Error> {
        let [p1, p2, p3] = PHONE_PATTERNS;
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: [Regex::new(p1)?, Regex::new(p2)?, Regex::new(p3)?],
            name: [
                RegexBuilder::new(NAME_LABEL_PATTERN)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()?,
                RegexBuilder::new(NAME_LINE_PATTERN)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()?,
                RegexBuilder::new(NAME_TITLE_CASE_PATTERN)
                    .multi_line(true)
                    .build()?,
            ],
        })
    }

    pub fn extract(&self, text: &str) -> ExtractedIdentity {
        let text = normalize_line_endings(text);
        ExtractedIdentity {
            name: self.find_name(&text),
            email: self.find_email(&text),
            phone: self.find_phone(&text),
        }
    }

    fn find_email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    fn find_phone(&self, text: &str) -> Option<String> {
        self.phone
            .iter()
            .find_map(|re| re.find(text))
            .map(|m| m.as_str().trim().to_string())
    }

    /// Only the first match of each pattern is considered. A candidate that fails
    /// the length gate hands over to the next pattern, not to the next match.
    fn find_name(&self, text: &str) -> Option<String> {
        self.name.iter().find_map(|re| {
            let candidate = re.captures(text)?.get(1)?.as_str();
            let cleaned = collapse_whitespace(candidate);
            let len = cleaned.chars().count();
            (MIN_NAME_CHARS..=MAX_NAME_CHARS)
                .contains(&len)
                .then_some(cleaned)
        })
    }
}

/// Extracts identity fields from resume text. Never fails: if the pattern set is
/// unusable, the failure is logged and every field comes back empty.
pub fn extract_identity(text: &str) -> ExtractedIdentity {
    extract_or_degrade(PATTERNS.as_ref(), text)
}

fn extract_or_degrade(
    patterns: Result<&IdentityPatterns, &regex::Error>,
    text: &str,
) -> ExtractedIdentity {
    match patterns {
        Ok(patterns) => patterns.extract(text),
        Err(e) => {
            error!("Identity extraction unavailable, returning empty fields: {e}");
            ExtractedIdentity::default()
        }
    }
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
