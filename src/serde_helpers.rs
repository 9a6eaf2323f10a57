//! Response decoding.
//!
//! With the `tracing` feature, fields the decoders do not capture are logged as warnings so
//! additions to the API surface show up in logs instead of being silently dropped.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes `value` into `T`, warning about every field `T` ignores.
///
/// Unknown fields never fail decoding. On failure the offending path and value are logged
/// before the error is returned.
#[cfg(feature = "tracing")]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), "decoding response");

    let original = value.clone();
    let mut unknown_paths: Vec<String> = Vec::new();

    let decoded: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        let path_result: Result<T, _> = serde_path_to_error::deserialize(&original);
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();
            tracing::error!(
                type_name = %type_name::<T>(),
                path = %path,
                value = %format_value(lookup_value(&original, &path)),
                error = %path_err.inner(),
                "response decoding failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

#[cfg(not(feature = "tracing"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Walks `path` through `value`.
///
/// Accepts both `serde_ignored` paths (`data.results.0.?.name`, where `?` marks an `Option`)
/// and `serde_path_to_error` paths (`data.results[0].name`).
#[cfg(feature = "tracing")]
fn lookup_value<'value>(value: &'value Value, path: &str) -> Option<&'value Value> {
    let mut current = value;

    for segment in parse_path_segments(path) {
        if segment == "?" {
            continue;
        }

        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Splits on `.` and `[...]`, dropping empty segments.
#[cfg(feature = "tracing")]
fn parse_path_segments(path: &str) -> Vec<String> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
