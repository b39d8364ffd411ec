use super::super::criteria::{AttributeValue, Categorical};

/// Trim and lower-case text; every other value passes through unchanged.
pub fn normalize(value: &AttributeValue) -> AttributeValue {
    match value {
        AttributeValue::Text(text) => AttributeValue::Text(normalize_text(text)),
        other => other.clone(),
    }
}

pub(crate) fn normalize_text(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Decide whether `received` satisfies `expected`.
///
/// A set on the expected side matches when any received value (after
/// normalization) is one of the normalized candidates. A single expected
/// string compares normalized text against a single received value. Any other
/// expected scalar requires strict equality with no normalization. Absence of
/// an expectation never matches.
pub fn value_matches(expected: Option<&Categorical>, received: &Categorical) -> bool {
    let Some(expected) = expected else {
        return false;
    };

    match expected {
        Categorical::AnyOf(candidates) => {
            let candidates: Vec<AttributeValue> = candidates.iter().map(normalize).collect();
            match received {
                Categorical::AnyOf(values) => values
                    .iter()
                    .map(normalize)
                    .any(|value| candidates.contains(&value)),
                Categorical::One(value) => candidates.contains(&normalize(value)),
            }
        }
        Categorical::One(AttributeValue::Text(text)) => match received {
            Categorical::One(value) => AttributeValue::Text(normalize_text(text)) == normalize(value),
            Categorical::AnyOf(_) => false,
        },
        Categorical::One(scalar) => matches!(received, Categorical::One(value) if value == scalar),
    }
}
