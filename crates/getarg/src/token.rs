use serde::Serialize;

const NEGATION_PREFIX: &str = "no";

/// A single parsed `-name[=value]` argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    name: String,
    value: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Name as written (after `--` normalization), including the leading dash.
    ///
    /// For a negation this is the literal `-noname` form.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the argument contained `=`.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Text after the first `=`, or `""` for a bare flag.
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Which table an argument is recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negated,
}

/// Classification of one raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lookup key: the flag name, or for `-noname` the base name `-name`.
    pub key: String,
    pub polarity: Polarity,
    pub entry: Entry,
}

impl Token {
    /// Classify a raw argument.
    ///
    /// Returns `None` for positionals (anything not starting with `-`).
    /// Everything else is accepted, however odd: `-=`, `-`, `--` all
    /// produce a token.
    pub fn parse(arg: &str) -> Option<Self> {
        if !arg.starts_with('-') {
            return None;
        }
        let arg = normalize_dashes(arg);

        let (name, value) = match arg.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (arg, None),
        };
        let entry = Entry::new(name, value);

        let token = match negated_base(name) {
            Some(base) => Self {
                key: base,
                polarity: Polarity::Negated,
                entry,
            },
            None => Self {
                key: name.to_string(),
                polarity: Polarity::Positive,
                entry,
            },
        };
        Some(token)
    }
}

/// `--name` is treated as `-name`. Only one dash is dropped.
fn normalize_dashes(arg: &str) -> &str {
    if arg.starts_with("--") { &arg[1..] } else { arg }
}

/// `-noname` -> `-name`. A bare `-no` is an ordinary flag.
fn negated_base(name: &str) -> Option<String> {
    let body = name.strip_prefix('-')?;
    body.strip_prefix(NEGATION_PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(|rest| format!("-{rest}"))
}
