//! Output format and exit status shared by the `refdoc` commands.
//!
//! | Code | Meaning                                                     |
//! |------|-------------------------------------------------------------|
//! | 0    | pages and index written (or listing printed)                |
//! | 1    | generation stopped: missing docs, I/O, template or lookup   |
//! | 2    | the manifest, config or an argument was rejected            |
//! | 3    | the symbol source could not be listed at all                |
//!
//! ```
//! use refdoc_core::Error;
//! use refdoc_core::cli::{ExitCode, OutputFormat};
//!
//! let format: OutputFormat = " Text ".parse().unwrap();
//! assert_eq!(format, OutputFormat::Text);
//!
//! let err = Error::MissingDocumentation {
//!     symbol: "nta".to_string(),
//! };
//! assert_eq!(ExitCode::for_error(&err), ExitCode::ERROR);
//! ```

use crate::Error;
use std::fmt;
use std::str::FromStr;

/// How command results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// One JSON document, for scripts and CI
    Json,
    /// `key: value` lines without color
    Text,
    /// Colored key/value lines
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Every format, in the order `--help` lists them.
    pub const ALL: [Self; 3] = [Self::Json, Self::Text, Self::Pretty];

    /// Name accepted by `--format`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                Error::InvalidArgument(format!(
                    "unknown output format '{s}', expected one of: {}",
                    names.join(", ")
                ))
            })
    }
}

/// Process exit status of a `refdoc` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Run completed.
    pub const SUCCESS: Self = Self(0);

    /// Generation failed part way; pages written before the failure stay.
    pub const ERROR: Self = Self(1);

    /// Manifest, config or command-line input was rejected.
    pub const INVALID_INPUT: Self = Self(2);

    /// The symbol source could not be listed; nothing was written.
    pub const SOURCE_ERROR: Self = Self(3);

    /// Wraps a raw status.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        Self(code)
    }

    /// Raw status for `std::process::exit`.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// `true` only for status 0.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Status a command exits with when it fails with `err`.
    ///
    /// ```
    /// use refdoc_core::Error;
    /// use refdoc_core::cli::ExitCode;
    ///
    /// let err = Error::DuplicateSymbol {
    ///     symbol: "ora".to_string(),
    /// };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
    /// ```
    #[must_use]
    pub const fn for_error(err: &Error) -> Self {
        match err {
            Error::SourceUnavailable { .. } => Self::SOURCE_ERROR,
            Error::ConfigError { .. }
            | Error::SerializationError { .. }
            | Error::ValidationError { .. }
            | Error::DuplicateSymbol { .. }
            | Error::InvalidArgument(_) => Self::INVALID_INPUT,
            Error::DocumentationLookup { .. }
            | Error::MissingDocumentation { .. }
            | Error::Io { .. }
            | Error::TemplateError { .. } => Self::ERROR,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip_through_parse() {
        for format in OutputFormat::ALL {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_format_parse_is_lenient_about_case_and_spacing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("  pretty\n".parse::<OutputFormat>().unwrap(), OutputFormat::Pretty);
    }

    #[test]
    fn test_unknown_format_lists_alternatives() {
        let err = "markdown".parse::<OutputFormat>().unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        let message = err.to_string();
        assert!(message.contains("'markdown'"));
        assert!(message.contains("json, text, pretty"));
    }

    #[test]
    fn test_pretty_is_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Pretty);
    }

    #[test]
    fn test_only_zero_is_success() {
        assert!(ExitCode::default().is_success());
        assert!(ExitCode::from_i32(0).is_success());
        for code in [ExitCode::ERROR, ExitCode::INVALID_INPUT, ExitCode::SOURCE_ERROR] {
            assert!(!code.is_success(), "{code} reported success");
        }
    }

    #[test]
    fn test_exit_statuses_are_distinct() {
        let raw: Vec<i32> = [
            ExitCode::SUCCESS,
            ExitCode::ERROR,
            ExitCode::INVALID_INPUT,
            ExitCode::SOURCE_ERROR,
        ]
        .into_iter()
        .map(i32::from)
        .collect();
        assert_eq!(raw, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unlistable_source_exits_with_source_error() {
        let err = Error::SourceUnavailable {
            source_name: "symbols.json".to_string(),
            source: "permission denied".into(),
        };
        assert_eq!(ExitCode::for_error(&err), ExitCode::SOURCE_ERROR);
    }

    #[test]
    fn test_rejected_input_exits_with_invalid_input() {
        let err = Error::ConfigError {
            message: "expected a table".to_string(),
        };
        assert_eq!(ExitCode::for_error(&err), ExitCode::INVALID_INPUT);
        assert_eq!(
            ExitCode::for_error(&Error::InvalidArgument("--format".to_string())),
            ExitCode::INVALID_INPUT
        );
    }

    #[test]
    fn test_generation_failure_exits_with_error() {
        let err = Error::MissingDocumentation {
            symbol: "nta".to_string(),
        };
        assert_eq!(ExitCode::for_error(&err), ExitCode::ERROR);
    }
}
