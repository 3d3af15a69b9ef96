//! Key-wise layering of JSON config documents.

use serde_json::{Map, Value};

/// Merge `overlay` into `base`.
///
/// Objects merge recursively; arrays, scalars and `null` in the overlay
/// replace whatever the base held at that key.
pub fn merge_into(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        if let Value::Object(nested) = value {
            if let Some(Value::Object(existing)) = base.get_mut(&key) {
                merge_into(existing, nested);
            } else {
                base.insert(key, Value::Object(nested));
            }
        } else {
            base.insert(key, value);
        }
    }
}

/// Dotted paths of keys in `overlay` that `base` does not define.
///
/// Once a key is unknown its children are not reported separately.
/// Keys accepted by `skip` at the top level are left out.
pub fn unknown_keys(
    base: &Map<String, Value>,
    overlay: &Map<String, Value>,
    skip: impl Fn(&str) -> bool,
) -> Vec<String> {
    let mut found = Vec::new();
    for (key, value) in overlay {
        if skip(key) {
            continue;
        }
        collect_unknown(base.get(key), value, key.clone(), &mut found);
    }
    found
}

fn collect_unknown(
    base: Option<&Value>,
    overlay: &Value,
    path: String,
    found: &mut Vec<String>,
) {
    match (base, overlay) {
        (None, _) => found.push(path),
        (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                collect_unknown(base_map.get(key), value, format!("{path}.{key}"), found);
            }
        }
        _ => {}
    }
}

/// Look up a dotted path such as `runtime.max_ticks`.
pub fn lookup<'a>(doc: &'a Map<String, Value>, dotted: &str) -> Option<&'a Value> {
    let mut parts = dotted.split('.');
    let mut current = doc.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}
