//! Per-kind validation run before a description is built.

use crate::{
    description::Description,
    error::ValidationError,
    kind::Requirement,
};

/// Checks `description` against its kind's requirements.
///
/// Only the description itself is checked; children are validated when they are
/// built.
///
/// # Errors
///
/// Returns the first unmet requirement.
pub fn check<E>(description: &Description<E>) -> Result<(), ValidationError> {
    let kind = match &description.kind {
        Some(kind) if !kind.tag().is_empty() => kind,
        _ => return Err(ValidationError::MissingType),
    };

    for requirement in kind.requirements() {
        match *requirement {
            Requirement::Attribute(attribute) => {
                if !description.attrs.contains_key(attribute) {
                    return Err(ValidationError::MissingAttribute {
                        kind: kind.clone(),
                        attribute,
                    });
                }
            }
            Requirement::AnyOf(candidates) => {
                if !candidates
                    .iter()
                    .any(|name| description.attrs.contains_key(*name))
                {
                    return Err(ValidationError::MissingAnyAttribute {
                        kind: kind.clone(),
                        candidates,
                    });
                }
            }
            Requirement::Text => {
                if description.text.as_deref().is_none_or(str::is_empty) {
                    return Err(ValidationError::MissingText { kind: kind.clone() });
                }
            }
        }
    }

    Ok(())
}

/// Returns whether `description` may be built, logging the reason when it may not.
#[must_use]
pub fn validate<E>(description: &Description<E>) -> bool {
    match check(description) {
        Ok(()) => true,
        Err(error) => {
            report_invalid(description, &error);
            false
        }
    }
}

pub(crate) fn report_invalid<E>(description: &Description<E>, error: &ValidationError) {
    tracing::error!(
        target: "svgpatch",
        id = description.id.as_deref().unwrap_or_default(),
        "invalid description: {error}"
    );
}
