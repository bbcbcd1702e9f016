//! Ignore policy over normalized diagnostics.

use a11ycheck_core_types::{AuditConfig, Diagnostic};

/// Caller-supplied ignore entries, applied per diagnostic.
///
/// An entry is either a diagnostic code (matched case-insensitively) or a
/// severity name (matched exactly, the severity set being fixed lowercase).
/// Either match drops the diagnostic; entries matching nothing are inert.
#[derive(Clone, Debug, Default)]
pub struct IgnorePolicy {
    entries: Vec<String>,
}

impl IgnorePolicy {
    pub fn new(entries: impl IntoIterator<Item = String>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.ignore.iter().cloned())
    }

    /// Keep the diagnostic unless its code or its severity name is ignored.
    pub fn is_wanted(&self, diagnostic: &Diagnostic) -> bool {
        let code = diagnostic.code.to_lowercase();
        if self.entries.iter().any(|entry| entry.to_lowercase() == code) {
            return false;
        }
        if self
            .entries
            .iter()
            .any(|entry| entry == diagnostic.severity.as_str())
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ycheck_core_types::Severity;

    fn diagnostic(code: &str, severity: Severity) -> Diagnostic {
        Diagnostic {
            code: code.to_string(),
            message: "msg".to_string(),
            severity,
            type_code: 1,
            context: None,
            selector: "html".to_string(),
        }
    }

    #[test]
    fn code_match_is_case_insensitive() {
        let policy = IgnorePolicy::new(["wcag1.err".to_string()]);
        assert!(!policy.is_wanted(&diagnostic("WCAG1.ERR", Severity::Error)));
    }

    #[test]
    fn code_match_folds_non_ascii_case() {
        let policy = IgnorePolicy::new(["wcag1.érr".to_string()]);
        assert!(!policy.is_wanted(&diagnostic("WCAG1.ÉRR", Severity::Error)));
    }

    #[test]
    fn severity_name_match_drops() {
        let policy = IgnorePolicy::new(["warning".to_string()]);
        assert!(!policy.is_wanted(&diagnostic("WCAG1.ERR", Severity::Warning)));
    }

    #[test]
    fn severity_name_match_is_exact() {
        // Severity names are a fixed lowercase set; "Warning" matches no
        // severity and no lowercase code here.
        let policy = IgnorePolicy::new(["Warning".to_string()]);
        assert!(policy.is_wanted(&diagnostic("WCAG1.ERR", Severity::Warning)));
    }

    #[test]
    fn unmatched_diagnostic_is_kept() {
        let policy = IgnorePolicy::new(["notice".to_string(), "other.code".to_string()]);
        assert!(policy.is_wanted(&diagnostic("WCAG1.ERR", Severity::Error)));
    }

    #[test]
    fn empty_policy_keeps_everything() {
        let policy = IgnorePolicy::default();
        assert!(policy.is_wanted(&diagnostic("anything", Severity::Unknown)));
    }
}
