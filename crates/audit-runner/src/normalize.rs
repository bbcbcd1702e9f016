//! Raw finding to diagnostic mapping.

use a11ycheck_core_types::{Diagnostic, Severity};
use sniffer_adapter::RawFinding;

use crate::selector::css_selector;
use crate::snippet::context_snippet;

/// Map one raw engine finding to a normalized diagnostic.
///
/// Pure: copies code/message/type code, derives the severity from the fixed
/// table, the context from the snippet truncator, and the selector from the
/// selector builder. Filtering is a separate stage.
pub fn normalize(finding: &RawFinding) -> Diagnostic {
    Diagnostic {
        code: finding.code.clone(),
        message: finding.message.clone(),
        severity: Severity::from_type_code(finding.type_code),
        type_code: finding.type_code,
        context: context_snippet(&finding.element),
        selector: css_selector(&finding.element),
    }
}
