//! Validation for the `[persona]` and `[fallbacks]` sections.

use crate::schema::AthenaConfig;

use super::helpers::validate_not_blank;

pub(crate) fn validate_persona(errors: &mut Vec<String>, config: &AthenaConfig) {
    let persona = &config.persona;
    validate_not_blank(errors, "persona.name", &persona.name);
    validate_not_blank(errors, "persona.system_instruction", &persona.system_instruction);
    validate_not_blank(errors, "persona.greeting", &persona.greeting);
}

/// Each fallback must be non-empty and distinguishable from the others.
pub(crate) fn validate_fallbacks(errors: &mut Vec<String>, config: &AthenaConfig) {
    let fallbacks = &config.fallbacks;
    let entries = [
        ("fallbacks.reconnecting", &fallbacks.reconnecting),
        ("fallbacks.connection_issue", &fallbacks.connection_issue),
        ("fallbacks.empty_response", &fallbacks.empty_response),
    ];

    for (name, value) in entries {
        validate_not_blank(errors, name, value);
    }

    for (i, (a_name, a)) in entries.iter().enumerate() {
        for (b_name, b) in entries.iter().skip(i + 1) {
            if a.trim() == b.trim() && !a.trim().is_empty() {
                errors.push(format!("{a_name} and {b_name} must differ"));
            }
        }
    }
}
