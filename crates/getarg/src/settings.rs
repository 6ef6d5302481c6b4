use std::collections::BTreeMap;

use serde::Serialize;

use crate::parse::parse_int_or_zero;
use crate::token::{Entry, Polarity, Token};

/// Parsed argument table.
///
/// Built once by [`Settings::load`] and read-only afterwards. `-name` and
/// `-noname` are kept in separate maps; which one applies is decided when a
/// boolean is looked up, so `-name` wins regardless of argument order.
///
/// To reload, build a new `Settings` and replace the old value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    positive: BTreeMap<String, Entry>,
    negated: BTreeMap<String, Entry>,
}

impl Settings {
    /// Build the table from an argument list, program name excluded.
    ///
    /// Arguments not starting with `-` are ignored. Within each map the last
    /// occurrence of a name wins.
    pub fn load<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut settings = Self::default();
        let mut skipped = 0usize;

        for arg in args {
            let arg = arg.as_ref();
            let Some(token) = Token::parse(arg) else {
                skipped += 1;
                continue;
            };
            tracing::trace!(arg, key = %token.key, polarity = ?token.polarity, "classified argument");
            let map = match token.polarity {
                Polarity::Positive => &mut settings.positive,
                Polarity::Negated => &mut settings.negated,
            };
            map.insert(token.key, token.entry);
        }

        tracing::debug!(
            positive = settings.positive.len(),
            negated = settings.negated.len(),
            skipped,
            "loaded arguments"
        );
        settings
    }

    /// Load from the current process arguments, skipping the program name.
    pub fn from_env() -> Self {
        Self::from_argv(std::env::args())
    }

    /// Load a full argv, skipping element 0 (the program name).
    pub fn from_argv<I>(argv: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::load(argv.into_iter().skip(1))
    }

    /// String value of `name`, or `default` if the flag was not given.
    ///
    /// A bare `-name` or `-name=` yields `""`, not the default.
    pub fn get_arg<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        match self.positive.get(name) {
            Some(entry) => entry.value(),
            None => default,
        }
    }

    /// Integer value of `name`, or `default` if the flag was not given.
    ///
    /// A present flag whose value is not a number yields `0`.
    pub fn get_int_arg(&self, name: &str, default: i64) -> i64 {
        match self.positive.get(name) {
            Some(entry) => parse_int_or_zero(entry.value()),
            None => default,
        }
    }

    /// Boolean value of `name`.
    ///
    /// `-name` and `-name=<anything but 0>` are true, `-name=0` is false.
    /// Without `-name`, `-noname` is false and `-noname=0` is true. With
    /// neither, `default`.
    pub fn get_bool_arg(&self, name: &str, default: bool) -> bool {
        if let Some(entry) = self.positive.get(name) {
            return entry.raw_value().is_none_or(|v| v != "0");
        }
        if let Some(entry) = self.negated.get(name) {
            return entry.raw_value().is_some_and(|v| v == "0");
        }
        default
    }

    /// [`get_bool_arg`](Self::get_bool_arg) with a `false` default.
    pub fn get_flag(&self, name: &str) -> bool {
        self.get_bool_arg(name, false)
    }

    /// Whether `name` itself was given (negations don't count).
    pub fn is_set(&self, name: &str) -> bool {
        self.positive.contains_key(name)
    }

    /// Whether `-no` + `name` was given.
    pub fn is_negated(&self, name: &str) -> bool {
        self.negated.contains_key(name)
    }

    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.positive.get(name)
    }

    /// The `-noname` entry recorded for `name`.
    pub fn negation(&self, name: &str) -> Option<&Entry> {
        self.negated.get(name)
    }

    pub fn positive(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.positive.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Negations keyed by base name (`-kev` for `-nokev`).
    pub fn negated(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.negated.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of stored entries across both maps.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negated.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Settings {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::load(iter)
    }
}
