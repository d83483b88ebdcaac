//! Debug Utilities Module
//!
//! Provides diagnostic output for the codec layers.
//!
//! This module provides infrastructure for debugging:
//! - Debug and verbose output gated by process-wide switches
//! - Word group formatting for tracing encode/decode steps
//! - Debug state initialisation from the `LARGE_INT_DEBUG` environment variable

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable read by [`DebugUtils::init_from_env`]
pub const DEBUG_ENV_VAR: &str = "LARGE_INT_DEBUG";

/// Global debug state
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);
static VERBOSE_DEBUG: AtomicBool = AtomicBool::new(false);

/// Debug output level selected by a setting string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    /// No output
    Off,
    /// `[DEBUG]` lines only
    Debug,
    /// `[DEBUG]` and `[VERBOSE]` lines
    Verbose,
}

impl DebugLevel {
    /// Parse a setting string
    ///
    /// Accepts (case-insensitively) `0`, `off`, `false`, empty for `Off`;
    /// `1`, `on`, `true`, `debug` for `Debug`; `2`, `verbose` for `Verbose`.
    ///
    /// # Arguments
    ///
    /// * `setting` - The raw setting value
    ///
    /// # Returns
    ///
    /// * `Ok(DebugLevel)` - Parsed level
    /// * `Err(DebugError)` - Unrecognised setting
    pub fn parse(setting: &str) -> Result<Self, DebugError> {
        match setting.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "off" | "false" => Ok(DebugLevel::Off),
            "1" | "on" | "true" | "debug" => Ok(DebugLevel::Debug),
            "2" | "verbose" => Ok(DebugLevel::Verbose),
            other => Err(DebugError::InvalidSetting(other.to_string())),
        }
    }
}

/// Debug utilities for codec diagnostics
pub struct DebugUtils;

impl DebugUtils {
    /// Enable debug output
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::enable();
    /// DebugUtils::debug_output("This will be printed");
    /// DebugUtils::disable();
    /// DebugUtils::debug_output("This will be suppressed");
    /// ```
    pub fn enable() {
        DEBUG_ENABLED.store(true, Ordering::Release);
    }

    /// Disable debug output
    pub fn disable() {
        DEBUG_ENABLED.store(false, Ordering::Release);
    }

    /// Check if debug output is enabled
    pub fn is_enabled() -> bool {
        DEBUG_ENABLED.load(Ordering::Acquire)
    }

    /// Enable verbose debug output
    ///
    /// Verbose lines are only written while debug output is also enabled.
    pub fn enable_verbose() {
        VERBOSE_DEBUG.store(true, Ordering::Release);
    }

    /// Disable verbose debug output
    pub fn disable_verbose() {
        VERBOSE_DEBUG.store(false, Ordering::Release);
    }

    /// Check if verbose debug is enabled
    pub fn is_verbose() -> bool {
        VERBOSE_DEBUG.load(Ordering::Acquire)
    }

    /// Apply a debug level to the global switches
    pub fn set_level(level: DebugLevel) {
        match level {
            DebugLevel::Off => {
                Self::disable();
                Self::disable_verbose();
            }
            DebugLevel::Debug => {
                Self::enable();
                Self::disable_verbose();
            }
            DebugLevel::Verbose => {
                Self::enable();
                Self::enable_verbose();
            }
        }
    }

    /// Initialise the debug switches from `LARGE_INT_DEBUG`
    ///
    /// An unset variable leaves the switches untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(level))` - Variable was set and applied
    /// * `Ok(None)` - Variable not set
    /// * `Err(DebugError)` - Variable set to an unrecognised value
    pub fn init_from_env() -> Result<Option<DebugLevel>, DebugError> {
        match std::env::var(DEBUG_ENV_VAR) {
            Ok(setting) => {
                let level = DebugLevel::parse(&setting)?;
                Self::set_level(level);
                Ok(Some(level))
            }
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(DebugError::InvalidSetting("<non-unicode>".to_string()))
            }
        }
    }

    /// Output a debug message
    ///
    /// # Arguments
    ///
    /// * `message` - The debug message to output
    pub fn debug_output(message: &str) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {}", message);
        }
    }

    /// Output a formatted debug message
    ///
    /// Each `{}` in `format` is replaced by the next argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infrastructure_debugging::DebugUtils;
    ///
    /// DebugUtils::enable();
    /// DebugUtils::debug_format("kind {} rejected {}", &[&"u64", &-1]);
    /// ```
    pub fn debug_format(format: &str, args: &[&dyn std::fmt::Display]) {
        if Self::is_enabled() {
            eprintln!("[DEBUG] {}", Self::format_message(format, args));
        }
    }

    /// Output a verbose debug message
    ///
    /// Only outputs if both debug and verbose modes are enabled.
    pub fn verbose_output(message: &str) {
        if Self::is_enabled() && Self::is_verbose() {
            eprintln!("[VERBOSE] {}", message);
        }
    }

    /// Output a word group at verbose level
    ///
    /// # Arguments
    ///
    /// * `label` - What the words belong to (e.g. `"encode i128"`)
    /// * `words` - Words, most significant first
    pub fn verbose_words(label: &str, words: &[u64]) {
        if Self::is_enabled() && Self::is_verbose() {
            eprintln!("[VERBOSE] {}: {}", label, Self::format_words(words));
        }
    }

    /// Substitute `{}` placeholders in order
    ///
    /// Surplus placeholders are left as-is; surplus arguments are ignored.
    pub fn format_message(format: &str, args: &[&dyn std::fmt::Display]) -> String {
        let mut result = String::with_capacity(format.len());
        let mut rest = format;
        let mut args = args.iter();

        while let Some(pos) = rest.find("{}") {
            result.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => result.push_str(&arg.to_string()),
                None => result.push_str("{}"),
            }
            rest = &rest[pos + 2..];
        }
        result.push_str(rest);
        result
    }

    /// Render words as `[0x..., 0x...]` with 16 hex digits each
    pub fn format_words(words: &[u64]) -> String {
        let rendered: Vec<String> = words.iter().map(|w| format!("0x{:016x}", w)).collect();
        format!("[{}]", rendered.join(", "))
    }
}

/// Debug operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DebugError {
    /// Unrecognised debug setting
    #[error("Invalid debug setting: {0}")]
    InvalidSetting(String),
}
