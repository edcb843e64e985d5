//! Scopes and fallback results.
//!
//! A *scope* is one of the two roots an entry can live under:
//!
//! | Scope    | Root                      |
//! |----------|---------------------------|
//! | `Local`  | `<cwd>/.<base>`           |
//! | `Global` | `<home>/.<base>`          |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which root directory an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Rooted at the current working directory.
    Local,
    /// Rooted at the user's home directory.
    Global,
}

impl Scope {
    /// Both scopes in fallback order: local first, then global.
    pub const FALLBACK_ORDER: [Scope; 2] = [Scope::Local, Scope::Global];

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Local => "local",
            Scope::Global => "global",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is neither `local` nor `global`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown scope '{0}' (expected 'local' or 'global')")]
pub struct ParseScopeError(pub String);

impl FromStr for Scope {
    type Err = ParseScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Scope::Local),
            "global" => Ok(Scope::Global),
            _ => Err(ParseScopeError(s.to_string())),
        }
    }
}

/// A value found by a local-or-global lookup, tagged with the scope that
/// answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    pub scope: Scope,
    pub value: String,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_display_is_lowercase() {
        assert_eq!(Scope::Local.to_string(), "local");
        assert_eq!(Scope::Global.to_string(), "global");
    }

    #[test]
    fn test_scope_parses_case_insensitively() {
        assert_eq!("LOCAL".parse::<Scope>(), Ok(Scope::Local));
        assert_eq!("Global".parse::<Scope>(), Ok(Scope::Global));
    }

    #[test]
    fn test_scope_parse_rejects_unknown_names() {
        let err = "project".parse::<Scope>().unwrap_err();
        assert_eq!(err, ParseScopeError("project".to_string()));
    }

    #[test]
    fn test_fallback_order_starts_with_local() {
        assert_eq!(Scope::FALLBACK_ORDER, [Scope::Local, Scope::Global]);
    }

    #[test]
    fn test_resolved_serializes_scope_in_lowercase() {
        // Arrange
        let resolved = Resolved {
            scope: Scope::Global,
            value: "region=us-east-1".to_string(),
        };

        // Act
        let json = serde_json::to_string(&resolved).expect("serialize");

        // Assert
        assert_eq!(json, r#"{"scope":"global","value":"region=us-east-1"}"#);
    }
}
