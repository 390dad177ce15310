// SPDX-FileCopyrightText: Copyright © 2025 VerFlag Developers
//
// SPDX-License-Identifier: MPL-2.0

//! The tri-state `--version` flag and its post-parse check.

use std::{fmt, process::ExitCode, str::FromStr};

use clap::{Arg, ArgMatches, Command};
use thiserror::Error;

use crate::info::Info;

/// Name the flag is registered under, doubling as its help-text value type
pub const FLAG_NAME: &str = "version";

const RAW: &str = "raw";

/// Parsed state of the `--version` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionValue {
    /// Continue as normal
    #[default]
    False,
    /// Print the human-readable version table
    True,
    /// Print a structural debug dump of the version info
    Raw,
}

impl VersionValue {
    /// Update the value from a raw token.
    ///
    /// `"raw"` selects [`VersionValue::Raw`]; anything else is parsed with
    /// the boolish token set. A failed parse still writes the fallback state
    /// (`False`) before the error is returned, so callers that drop the
    /// error are left with a defined value.
    pub fn set(&mut self, input: &str) -> Result<(), Error> {
        if input == RAW {
            *self = Self::Raw;
            return Ok(());
        }
        let (value, result) = match parse_bool(input) {
            Some(value) => (value, Ok(())),
            None => (false, Err(Error::InvalidBool(input.to_owned()))),
        };
        *self = if value { Self::True } else { Self::False };
        result
    }
}

impl FromStr for VersionValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Self::default();
        value.set(s)?;
        Ok(value)
    }
}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str(RAW),
            value => write!(f, "{}", *value == Self::True),
        }
    }
}

/// The boolish token set accepted alongside `"raw"`
fn parse_bool(input: &str) -> Option<bool> {
    const TRUTHY: &[&str] = &["true", "t", "yes", "y", "on", "1"];
    const FALSY: &[&str] = &["false", "f", "no", "n", "off", "0"];

    let token = input.to_ascii_lowercase();
    if TRUTHY.contains(&token.as_str()) {
        Some(true)
    } else if FALSY.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid boolean value {0:?}")]
    InvalidBool(String),
}

/// Register `--version[=true|false|raw]` on an existing command.
///
/// The bare `--version` form maps to `--version=true`. Registering the same
/// definition on several commands is how multiple command surfaces share one
/// flag; each parse stores its value inside its own [`ArgMatches`].
pub fn add_to_command(command: Command) -> Command {
    command.arg(
        Arg::new(FLAG_NAME)
            .long(FLAG_NAME)
            .value_name(FLAG_NAME)
            .value_parser(VersionValue::from_str)
            .num_args(0..=1)
            .require_equals(true)
            .default_value("false")
            .default_missing_value("true")
            .help("Print version information and quit"),
    )
}

/// Check whether version output was requested and print it.
///
/// Call once, directly after argument parsing and before any other program
/// logic. Returns the exit code the caller should terminate with, or `None`
/// when the program should continue as normal.
pub fn check(matches: &ArgMatches) -> Option<ExitCode> {
    let value = matches
        .try_get_one::<VersionValue>(FLAG_NAME)
        .ok()
        .flatten()
        .copied()
        .unwrap_or_default();
    let report = report(value, &Info::collect())?;
    println!("{report}");
    Some(ExitCode::SUCCESS)
}

/// Render the output requested by `value`, if any
fn report(value: VersionValue, info: &Info) -> Option<String> {
    match value {
        VersionValue::Raw => Some(format!("{info:#?}")),
        VersionValue::True => Some(info.to_string()),
        VersionValue::False => None,
    }
}

#[cfg(test)]
mod tests {
    use clap::Command;

    use super::{add_to_command, check, report, VersionValue, FLAG_NAME};
    use crate::info::Info;

    fn parse(args: &[&str]) -> clap::ArgMatches {
        add_to_command(Command::new("test"))
            .try_get_matches_from(args)
            .expect("parse failure")
    }

    fn flag_value(matches: &clap::ArgMatches) -> VersionValue {
        *matches.get_one::<VersionValue>(FLAG_NAME).expect("missing flag value")
    }

    #[test]
    fn set_raw() {
        let mut value = VersionValue::False;
        value.set("raw").expect("raw is valid");
        assert_eq!(value, VersionValue::Raw);
    }

    #[test]
    fn set_boolish_tokens() {
        for token in ["true", "1", "yes"] {
            let mut value = VersionValue::False;
            value.set(token).expect("truthy token");
            assert_eq!(value, VersionValue::True, "token {token:?}");
        }
        for token in ["false", "0", "no"] {
            let mut value = VersionValue::True;
            value.set(token).expect("falsy token");
            assert_eq!(value, VersionValue::False, "token {token:?}");
        }
    }

    #[test]
    fn set_invalid_errors_and_writes_fallback() {
        let mut value = VersionValue::True;
        let result = value.set("invalid");
        assert!(result.is_err());
        assert_eq!(value, VersionValue::False);
    }

    #[test]
    fn display_forms() {
        assert_eq!(VersionValue::False.to_string(), "false");
        assert_eq!(VersionValue::True.to_string(), "true");
        assert_eq!(VersionValue::Raw.to_string(), "raw");
    }

    #[test]
    fn absent_value_displays_empty() {
        let value: Option<VersionValue> = None;
        let shown = value.map(|v| v.to_string()).unwrap_or_default();
        assert_eq!(shown, "");
    }

    #[test]
    fn absent_flag_is_false() {
        let matches = parse(&["test"]);
        assert_eq!(flag_value(&matches), VersionValue::False);
        assert!(check(&matches).is_none());
    }

    #[test]
    fn bare_flag_is_true() {
        let matches = parse(&["test", "--version"]);
        assert_eq!(flag_value(&matches), VersionValue::True);
    }

    #[test]
    fn explicit_values() {
        assert_eq!(flag_value(&parse(&["test", "--version=true"])), VersionValue::True);
        assert_eq!(flag_value(&parse(&["test", "--version=false"])), VersionValue::False);
        assert_eq!(flag_value(&parse(&["test", "--version=raw"])), VersionValue::Raw);
    }

    #[test]
    fn invalid_value_is_a_usage_error() {
        let result = add_to_command(Command::new("test")).try_get_matches_from(["test", "--version=bogus"]);
        assert!(result.is_err());
    }

    #[test]
    fn unregistered_flag_is_ignored() {
        let matches = Command::new("test")
            .try_get_matches_from(["test"])
            .expect("parse failure");
        assert!(check(&matches).is_none());
    }

    #[test]
    fn report_selects_rendering() {
        let info = Info::collect();
        assert_eq!(report(VersionValue::False, &info), None);
        assert_eq!(report(VersionValue::True, &info), Some(info.to_string()));

        let raw = report(VersionValue::Raw, &info).expect("raw report");
        assert!(raw.starts_with("Info {"));
        assert!(raw.contains("platform:"));
    }
}
