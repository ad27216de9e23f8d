//! Mapper options and the environment they default from.

use serde::{Deserialize, Serialize};

/// Name of the process variable read by [`Environment::detect`].
pub const ENV_VAR: &str = "APP_ENV";

/// Toggles for the built-in output transformers.
///
/// Both default to `false`, the safe production setting.
///
/// # Examples
///
/// ```
/// use error_mapper::{MapperOptions, OptionsPatch};
///
/// let options = MapperOptions::default().merge(OptionsPatch {
///     show_stack_trace: Some(true),
///     ..Default::default()
/// });
///
/// assert!(options.show_stack_trace);
/// assert!(!options.show_unknown_error_message);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperOptions {
    /// Copy the raw error's stack trace into every output.
    #[serde(alias = "showStackTrace")]
    pub show_stack_trace: bool,
    /// Show the message of errors that no mapping recognized, instead of the
    /// generic internal error text.
    #[serde(alias = "showUnknownErrorMessage")]
    pub show_unknown_error_message: bool,
}

impl MapperOptions {
    #[inline]
    pub const fn new(show_stack_trace: bool, show_unknown_error_message: bool) -> Self {
        Self { show_stack_trace, show_unknown_error_message }
    }

    /// Defaults for an environment: everything visible in development and
    /// test, nothing otherwise.
    #[inline]
    pub const fn for_environment(env: &Environment) -> Self {
        let verbose = env.is_development || env.is_test;
        Self { show_stack_trace: verbose, show_unknown_error_message: verbose }
    }

    /// Shallow merge: fields set in `patch` win.
    #[inline]
    pub fn merge(self, patch: OptionsPatch) -> Self {
        Self {
            show_stack_trace: patch.show_stack_trace.unwrap_or(self.show_stack_trace),
            show_unknown_error_message: patch
                .show_unknown_error_message
                .unwrap_or(self.show_unknown_error_message),
        }
    }
}

/// A partial [`MapperOptions`]; `None` leaves the current value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
    #[serde(alias = "showStackTrace", skip_serializing_if = "Option::is_none")]
    pub show_stack_trace: Option<bool>,
    #[serde(alias = "showUnknownErrorMessage", skip_serializing_if = "Option::is_none")]
    pub show_unknown_error_message: Option<bool>,
}

impl From<MapperOptions> for OptionsPatch {
    #[inline]
    fn from(options: MapperOptions) -> Self {
        Self {
            show_stack_trace: Some(options.show_stack_trace),
            show_unknown_error_message: Some(options.show_unknown_error_message),
        }
    }
}

/// Runtime mode flags consumed when deriving default options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Environment {
    pub is_development: bool,
    pub is_test: bool,
}

impl Environment {
    pub const PRODUCTION: Self = Self { is_development: false, is_test: false };
    pub const DEVELOPMENT: Self = Self { is_development: true, is_test: false };
    pub const TEST: Self = Self { is_development: false, is_test: true };

    /// Reads the mode from the `APP_ENV` process variable.
    ///
    /// Unset or unrecognized values are treated as production.
    pub fn detect() -> Self {
        std::env::var(ENV_VAR)
            .map(|value| Self::from_name(&value))
            .unwrap_or(Self::PRODUCTION)
    }

    /// Parses a mode name (`development`, `dev`, `test`, `testing`, case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::DEVELOPMENT,
            "test" | "testing" => Self::TEST,
            _ => Self::PRODUCTION,
        }
    }

    #[inline]
    pub const fn is_production(&self) -> bool {
        !self.is_development && !self.is_test
    }
}
