//! Lint run configuration.
//!
//! This module provides [`LintConfig`], the value a host threads through a
//! lint run. It replaces any process-wide "fix mode" switch: a run fixes
//! findings only when the config it was handed says so.
//!
//! # Example
//!
//! ```
//! use bracelint_core::config::LintConfig;
//!
//! // Report only (default)
//! let config = LintConfig::default();
//! assert!(!config.fix);
//!
//! // Report and fix, skipping one rule
//! let config = LintConfig::new()
//!     .with_fix(true)
//!     .disable_rule("manifest_whitespace_opening_brace_after");
//! assert!(!config.is_enabled("manifest_whitespace_opening_brace_after"));
//! ```

/// Configuration for a lint run.
///
/// # Default Values
///
/// | Setting | Default | Meaning |
/// |---------|---------|---------|
/// | `fix` | `false` | only report findings |
/// | `disabled` | empty | every registered rule runs |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintConfig {
    /// Apply each rule's fix to its findings after checking.
    ///
    /// When `false`, no rule mutates the stream.
    pub fix: bool,

    /// Names of rules to skip.
    pub disabled: Vec<String>,
}

impl LintConfig {
    /// Creates a new configuration with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables fix mode.
    #[inline]
    pub fn with_fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Skips the rule called `name`.
    pub fn disable_rule(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.disabled.contains(&name) {
            self.disabled.push(name);
        }
        self
    }

    /// Whether the rule called `name` should run.
    #[inline]
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.iter().any(|d| d == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_config_defaults() {
        let config = LintConfig::default();
        assert!(!config.fix);
        assert!(config.disabled.is_empty());
        assert!(config.is_enabled("anything"));
    }

    #[test]
    fn test_lint_config_builder() {
        let config = LintConfig::new()
            .with_fix(true)
            .disable_rule("a")
            .disable_rule("a")
            .disable_rule("b");

        assert!(config.fix);
        assert_eq!(config.disabled, vec!["a".to_string(), "b".to_string()]);
        assert!(!config.is_enabled("a"));
        assert!(!config.is_enabled("b"));
        assert!(config.is_enabled("c"));
    }
}
