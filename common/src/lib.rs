use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Collapses a set of validation failures into the single message returned to clients.
///
/// Only the first failing field is reported. Fields are visited in name order so the
/// message is stable across runs (`ValidationErrors` is backed by a hash map). Nested
/// structs and lists are reported with their path, e.g. `exercises[1].sets`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    first_error(errors, "").unwrap_or_else(|| "Invalid request body".to_string())
}

fn first_error(errors: &ValidationErrors, prefix: &str) -> Option<String> {
    let all = errors.errors();
    let mut fields: Vec<_> = all.keys().collect();
    fields.sort();

    fields.into_iter().find_map(|field| {
        let path = format!("{prefix}{field}");
        match all.get(field)? {
            ValidationErrorsKind::Field(errs) => errs
                .first()
                .map(|err| format!("{}: {}", path, describe(err))),
            ValidationErrorsKind::Struct(inner) => first_error(inner, &format!("{path}.")),
            ValidationErrorsKind::List(items) => items
                .iter()
                .find_map(|(index, inner)| first_error(inner, &format!("{path}[{index}].")))
        }
    })
}

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }

    let min = err.params.get("min").map(ToString::to_string);
    let max = err.params.get("max").map(ToString::to_string);

    match (err.code.as_ref(), min, max) {
        ("length", Some(min), Some(max)) => format!("length must be between {min} and {max}"),
        ("length", Some(min), None) => format!("length must be at least {min}"),
        ("length", None, Some(max)) => format!("length must be at most {max}"),
        ("range", Some(min), Some(max)) => format!("must be between {min} and {max}"),
        ("range", Some(min), None) => format!("must be at least {min}"),
        ("range", None, Some(max)) => format!("must be at most {max}"),
        ("email", _, _) => "must be a valid email address".to_string(),
        ("required", _, _) => "is required".to_string(),
        (code, _, _) => format!("failed '{code}' validation"),
    }
}
