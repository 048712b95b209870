//! # Output Configuration
//!
//! This module controls whether CLI output is styled, based on terminal
//! capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use local_repos::output::OutputConfig;
//!
//! let out = OutputConfig::from_env_and_flag("auto");
//! println!("{} {}", out.heading("Repository"), out.marker("[missing]"));
//! ```

use console::style;
use std::env;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of the `--color` flag: "always", "never", or
    /// "auto". In auto mode colors are disabled if `NO_COLOR` is set (any
    /// value, including empty), `CLICOLOR=0`, `TERM=dumb`, or stdout is not a
    /// TTY (unless `CLICOLOR_FORCE=1`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    /// Bold text for field labels and section titles.
    pub fn heading(&self, text: &str) -> String {
        if self.use_color {
            style(text).bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    /// A status marker such as `[missing]`, colored by what it reports.
    pub fn marker(&self, marker: &str) -> String {
        if !self.use_color {
            return marker.to_string();
        }

        let styled = match marker {
            "[missing]" => style(marker).red(),
            "[tutorial]" => style(marker).cyan(),
            _ => style(marker).yellow(),
        };
        styled.force_styling(true).to_string()
    }

    /// Dimmed text for secondary details such as paths and hashes.
    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            style(text).dim().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}
