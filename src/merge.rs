//! # Deep Merge Module
//!
//! Provides recursive merging of JSON-like document values. Objects merge
//! key-wise, recursing on shared keys; any other pairing resolves to the
//! overlay value. Arrays are replaced, not concatenated.
//!
//! The configuration layer uses these functions to layer multiple
//! configuration documents, and they are available on their own for
//! application data.

use serde_json::Value as JsonValue;

/// Recursively merges `overlay` on top of `base`, returning the result.
///
/// Object values merge key-wise: keys present in both sides recurse, keys
/// present in one side are kept. Any other pairing (scalars, arrays, or a
/// type mismatch between the sides) resolves to a clone of the overlay.
///
/// This is a pure function with no error conditions.
///
/// # Arguments
///
/// * `base` - The value providing defaults.
/// * `overlay` - The value taking precedence.
///
/// # Returns
///
/// * `JsonValue` - The merged value.
///
/// # Examples
///
/// ```
/// use potato_util::merge::deep_merge;
/// use serde_json::json;
///
/// let base = json!({"slug": {"separator": "-", "max_length": 80}, "debug": false});
/// let overlay = json!({"slug": {"separator": "_"}, "debug": true});
///
/// let merged = deep_merge(&base, &overlay);
/// assert_eq!(
///     merged,
///     json!({"slug": {"separator": "_", "max_length": 80}, "debug": true})
/// );
/// ```
pub fn deep_merge(base: &JsonValue, overlay: &JsonValue) -> JsonValue {
    match (base, overlay) {
        (JsonValue::Object(base_map), JsonValue::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, overlay_value) in overlay_map {
                match merged.get_mut(key) {
                    Some(base_value) => {
                        *base_value = deep_merge(base_value, overlay_value);
                    }
                    None => {
                        _ = merged
                            .insert(key.clone(), overlay_value.clone());
                    }
                }
            }
            JsonValue::Object(merged)
        }
        _ => overlay.clone(),
    }
}

/// In-place variant of [`deep_merge`].
///
/// Consumes the overlay and merges it into `base`, avoiding clones of
/// subtrees that only one side provides.
///
/// # Arguments
///
/// * `base` - The value providing defaults, updated in place.
/// * `overlay` - The value taking precedence.
pub fn deep_merge_into(base: &mut JsonValue, overlay: JsonValue) {
    match (base, overlay) {
        (JsonValue::Object(base_map), JsonValue::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => {
                        deep_merge_into(base_value, overlay_value);
                    }
                    None => {
                        _ = base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merges_nested_objects() {
        let base = json!({"a": {"b": 1, "c": 2}, "d": 3});
        let overlay = json!({"a": {"c": 20, "e": 30}});

        let merged = deep_merge(&base, &overlay);
        assert_eq!(merged, json!({"a": {"b": 1, "c": 20, "e": 30}, "d": 3}));
    }

    #[test]
    fn test_overlay_wins_on_scalars() {
        let base = json!({"debug": false});
        let overlay = json!({"debug": true});

        assert_eq!(deep_merge(&base, &overlay), json!({"debug": true}));
    }

    #[test]
    fn test_arrays_are_replaced() {
        let base = json!({"tags": ["a", "b"]});
        let overlay = json!({"tags": ["c"]});

        assert_eq!(deep_merge(&base, &overlay), json!({"tags": ["c"]}));
    }

    #[test]
    fn test_type_mismatch_resolves_to_overlay() {
        let base = json!({"value": {"nested": 1}});
        let overlay = json!({"value": 42});

        assert_eq!(deep_merge(&base, &overlay), json!({"value": 42}));
    }

    #[test]
    fn test_in_place_matches_pure_variant() {
        let base = json!({"a": {"b": 1}, "keep": "yes"});
        let overlay = json!({"a": {"b": 2, "c": 3}});

        let expected = deep_merge(&base, &overlay);
        let mut in_place = base;
        deep_merge_into(&mut in_place, overlay);
        assert_eq!(in_place, expected);
    }

    #[test]
    fn test_merge_into_non_object_base() {
        let mut base = json!(1);
        deep_merge_into(&mut base, json!({"a": 1}));
        assert_eq!(base, json!({"a": 1}));
    }
}
