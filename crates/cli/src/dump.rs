use anyhow::{Context, Result};
use getarg::{Entry, Settings};

/// One line per entry: `+ -name[=value]` for flags, `- -noname[=value]` for negations.
pub fn to_text(settings: &Settings) -> String {
    let mut out = String::new();
    for (_, entry) in settings.positive() {
        push_line(&mut out, '+', entry);
    }
    for (_, entry) in settings.negated() {
        push_line(&mut out, '-', entry);
    }
    out
}

pub fn to_json(settings: &Settings) -> Result<String> {
    let mut json = serde_json::to_string_pretty(settings).context("failed to serialize settings")?;
    json.push('\n');
    Ok(json)
}

fn push_line(out: &mut String, marker: char, entry: &Entry) {
    let line = match entry.raw_value() {
        Some(value) => format!("{marker} {}={value}\n", entry.name()),
        None => format!("{marker} {}\n", entry.name()),
    };
    out.push_str(&line);
}
