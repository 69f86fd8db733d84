//! Structured diagnostics for manifest validation and generation warnings.
//!
//! Replaces the ad-hoc list-of-strings pattern with typed diagnostics
//! carrying stable error codes and severity levels.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A schema violation that causes validation failure.
    Error,
    /// A potential issue that does not cause failure.
    Warning,
}

/// A structured diagnostic message from validation.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable error code (e.g., `"E001"`, `"C001"`, `"W001"`).
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Manifest field that caused the diagnostic (e.g., `"id"`, `"items"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity, code, and message.
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Shorthand for an error-severity diagnostic.
    #[must_use]
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Set the field that caused this diagnostic.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Returns `true` if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if this diagnostic is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Display format:
/// - Errors: `"message"` (no prefix)
/// - Warnings: `"warning: message"`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

// ── Error code constants ────────────────────────────────────────────────

// Infrastructure errors (E000)

/// Infrastructure error (file not found, IO error, parse failure).
pub const E000: &str = "E000";

// Collection id errors (E001–E003)

/// Id missing or not a string.
pub const E001: &str = "E001";
/// Id contains characters outside lowercase kebab-case.
pub const E002: &str = "E002";
/// Id length outside 1–50.
pub const E003: &str = "E003";

// Name errors (E011–E012)

/// Name missing or not a string.
pub const E011: &str = "E011";
/// Name length outside 1–100.
pub const E012: &str = "E012";

// Description errors (E021–E022)

/// Description missing or not a string.
pub const E021: &str = "E021";
/// Description length outside 1–500.
pub const E022: &str = "E022";

// Tags errors (E031–E035)

/// Tags present but not an array.
pub const E031: &str = "E031";
/// More than 10 tags.
pub const E032: &str = "E032";
/// Tag is not a string.
pub const E033: &str = "E033";
/// Tag contains characters outside lowercase kebab-case.
pub const E034: &str = "E034";
/// Tag length outside 1–30.
pub const E035: &str = "E035";

// Items errors (E041–E049)

/// Items missing or not an array.
pub const E041: &str = "E041";
/// Items array is empty.
pub const E042: &str = "E042";
/// Items array exceeds the maximum size.
pub const E043: &str = "E043";
/// Item entry is not a mapping.
pub const E044: &str = "E044";
/// Item has no path string.
pub const E045: &str = "E045";
/// Item has no kind string.
pub const E046: &str = "E046";
/// Item kind outside the closed enum.
pub const E047: &str = "E047";
/// Referenced item file does not exist.
pub const E048: &str = "E048";
/// Item path suffix does not match its kind.
pub const E049: &str = "E049";

// Display errors (E051–E053)

/// Display present but not a mapping.
pub const E051: &str = "E051";
/// Display ordering outside {manual, alpha}.
pub const E052: &str = "E052";
/// Display show_badge is not a boolean.
pub const E053: &str = "E053";

// Agent file errors (E061–E073)

/// Agent file could not be parsed.
pub const E061: &str = "E061";
/// Agent name missing or not a string.
pub const E062: &str = "E062";
/// Agent name length outside 1–50.
pub const E063: &str = "E063";
/// Agent description missing or not a string.
pub const E064: &str = "E064";
/// Agent description length outside 1–500.
pub const E065: &str = "E065";
/// Agent tools present but not an array.
pub const E066: &str = "E066";
/// Agent mcp-servers present but not a mapping.
pub const E067: &str = "E067";
/// MCP server entry is not a mapping.
pub const E068: &str = "E068";
/// MCP server has no type string.
pub const E069: &str = "E069";
/// Local MCP server has no command.
pub const E070: &str = "E070";
/// MCP server args present but not an array.
pub const E071: &str = "E071";
/// MCP server tools present but not an array.
pub const E072: &str = "E072";
/// MCP server env present but not a mapping.
pub const E073: &str = "E073";

// Cross-file conflict codes (C001)

/// Collection id collides with an earlier manifest.
pub const C001: &str = "C001";

// Warning codes (W001–W002)

/// Manifest failed to parse during generation and was skipped.
pub const W001: &str = "W001";
/// Root README missing or markers not found; splice skipped.
pub const W002: &str = "W002";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_no_prefix() {
        let d = Diagnostic::error(E001, "ID is required and must be a string");
        assert_eq!(d.to_string(), "ID is required and must be a string");
    }

    #[test]
    fn warning_display_with_prefix() {
        let d = Diagnostic::new(Severity::Warning, W001, "failed to parse bad.collection.yml");
        assert_eq!(d.to_string(), "warning: failed to parse bad.collection.yml");
    }

    #[test]
    fn is_error_true_for_errors() {
        let d = Diagnostic::error(E001, "test");
        assert!(d.is_error());
        assert!(!d.is_warning());
    }

    #[test]
    fn with_field_sets_field() {
        let d = Diagnostic::error(E001, "test").with_field("id");
        assert_eq!(d.field, Some("id"));
    }

    #[test]
    fn serialize_json_error() {
        let d = Diagnostic::error(E001, "ID is required and must be a string").with_field("id");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["code"], "E001");
        assert_eq!(json["field"], "id");
    }

    #[test]
    fn serialize_json_omits_none_field() {
        let d = Diagnostic::error(E000, "test");
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("field").is_none());
    }

    #[test]
    fn error_codes_are_unique() {
        let codes = [
            E000, E001, E002, E003, E011, E012, E021, E022, E031, E032, E033, E034, E035, E041,
            E042, E043, E044, E045, E046, E047, E048, E049, E051, E052, E053, E061, E062, E063,
            E064, E065, E066, E067, E068, E069, E070, E071, E072, E073, C001, W001, W002,
        ];
        let mut seen = std::collections::HashSet::new();
        for code in &codes {
            assert!(seen.insert(code), "duplicate error code: {code}");
        }
    }
}
