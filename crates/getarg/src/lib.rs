//! Permissive `-flag=value` argument table.
//!
//! Raw arguments are loaded once into a [`Settings`] value, which is then
//! queried with typed accessors:
//!
//! ```
//! use getarg::Settings;
//!
//! let settings = Settings::load(["-threads=4", "--datadir=/tmp/x", "-nolisten"]);
//! assert_eq!(settings.get_int_arg("-threads", 1), 4);
//! assert_eq!(settings.get_arg("-datadir", "~/.app"), "/tmp/x");
//! assert!(!settings.get_bool_arg("-listen", true));
//! ```
//!
//! Lookups never fail. A flag that is present always beats the caller's
//! default, and `-name` always beats `-noname` no matter which came first.

mod parse;
mod settings;
mod token;

pub use parse::parse_int_or_zero;
pub use settings::Settings;
pub use token::{Entry, Polarity, Token};
