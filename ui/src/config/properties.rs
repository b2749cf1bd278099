//! Reader for Java-style `.properties` files.
//!
//! Each non-blank line that does not start with `#` or `!` is a key followed
//! by a value, separated by `=`, `:` or just whitespace. A key with nothing
//! after it has an empty value. Whitespace around keys and values is
//! ignored, and a later line with the same key replaces an earlier one.
//!
//! A line ending in an odd number of backslashes continues onto the next
//! line, with leading whitespace of the continuation dropped. Other escape
//! sequences (`\t`, `\uXXXX`, escaped separators in keys) are not
//! supported; keys and values are taken literally.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    /// Regex matching a single `key=value`, `key: value` or `key value`
    /// line.
    static ref PROPERTY_LINE_REGEX: regex::Regex =
        regex::Regex::new(r"^\s*([^=:\s]+)(?:\s*[=:]\s*|\s+|$)(.*?)\s*$").unwrap();
}

/// Error encountered while reading properties.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PropertiesError {
    /// A line is neither blank, a comment, nor a key/value pair.
    BadLine { line: usize, contents: String },
    /// A required key is missing.
    MissingKey(String),
    /// A value could not be parsed as the expected type.
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
impl fmt::Display for PropertiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertiesError::BadLine { line, contents } => {
                write!(f, "Line {} is not a key/value pair: {:?}", line, contents)
            }
            PropertiesError::MissingKey(key) => {
                write!(f, "Properties do not contain key: {}", key)
            }
            PropertiesError::InvalidValue {
                key,
                value,
                expected,
            } => write!(
                f,
                "Value for key {} is not {}; it was: {:?}",
                key, expected, value,
            ),
        }
    }
}
impl std::error::Error for PropertiesError {}

/// Set of string key/value pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Properties(HashMap<String, String>);

impl FromStr for Properties {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ret = Self::default();
        let mut lines = s.lines().enumerate();
        while let Some((i, line)) = lines.next() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            let mut logical_line = trimmed.to_owned();
            while is_continued(&logical_line) {
                logical_line.pop();
                match lines.next() {
                    Some((_, next)) => logical_line.push_str(next.trim_start()),
                    None => break,
                }
            }
            let captures = PROPERTY_LINE_REGEX
                .captures(&logical_line)
                .ok_or_else(|| PropertiesError::BadLine {
                    line: i + 1,
                    contents: line.to_owned(),
                })?;
            ret.set(&captures[1], &captures[2]);
        }
        Ok(ret)
    }
}

impl Properties {
    /// Sets a property, replacing any existing value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_owned(), value.to_owned());
    }

    /// Returns the raw string value of a property.
    pub fn get(&self, key: &str) -> Result<&str, PropertiesError> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PropertiesError::MissingKey(key.to_owned()))
    }
    /// Returns a property parsed as a number.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Result<T, PropertiesError> {
        let value = self.get(key)?;
        value
            .parse()
            .map_err(|_| invalid_value(key, value, "a valid integer"))
    }
    /// Returns a property that must be `T` or `F` (case-insensitive).
    pub fn get_bool(&self, key: &str) -> Result<bool, PropertiesError> {
        let value = self.get(key)?;
        if value.eq_ignore_ascii_case("T") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("F") {
            Ok(false)
        } else {
            Err(invalid_value(key, value, "T or F"))
        }
    }
    /// Returns a property parsed as a comma-separated list of numbers. An
    /// empty value is an empty list.
    pub fn get_list<T: FromStr>(&self, key: &str) -> Result<Vec<T>, PropertiesError> {
        let value = self.get(key)?;
        if value.trim().is_empty() {
            return Ok(vec![]);
        }
        value
            .split(',')
            .map(|item| {
                item.trim()
                    .parse()
                    .map_err(|_| invalid_value(key, value, "a list of valid integers"))
            })
            .collect()
    }
}

/// Returns whether a line ends in an unescaped backslash.
fn is_continued(line: &str) -> bool {
    line.chars().rev().take_while(|&ch| ch == '\\').count() % 2 == 1
}

fn invalid_value(key: &str, value: &str, expected: &'static str) -> PropertiesError {
    PropertiesError::InvalidValue {
        key: key.to_owned(),
        value: value.to_owned(),
        expected,
    }
}
