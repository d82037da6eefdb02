use std::collections::BTreeMap;

/// Annotation controlling whether an ingress appears in the viewer output.
pub const ENABLED_ANNOTATION: &str = "kavorites.koudijs.app/enabled";

/// Determines whether an ingress should be included based on the enabled annotation
/// and the process-wide default setting.
///
/// The annotation value is trimmed and lower-cased before comparison, so `"TRUE "` and
/// `" False"` behave like `"true"` and `"false"`. A missing annotation, or any value
/// other than `"true"`/`"false"`, defers to `default_enabled`.
///
/// # Arguments
/// `annotations` - Annotation map of the ingress resource.
/// `default_enabled` - Whether unannotated ingresses are included.
pub fn is_enabled(annotations: &BTreeMap<String, String>, default_enabled: bool) -> bool {
    return match annotations.get(ENABLED_ANNOTATION) {
        Some(value) => {
            let normalized: String = value.trim().to_lowercase();
            if normalized == "false" {
                false
            } else if normalized == "true" {
                true
            } else {
                default_enabled
            }
        }
        None => default_enabled,
    };
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{is_enabled, ENABLED_ANNOTATION};

    fn annotated(value: &str) -> BTreeMap<String, String> {
        let mut annotations: BTreeMap<String, String> = BTreeMap::new();
        annotations.insert(ENABLED_ANNOTATION.to_string(), value.to_string());
        return annotations;
    }

    #[test]
    fn test_missing_annotation_defers_to_default() {
        let annotations: BTreeMap<String, String> = BTreeMap::new();
        assert!(is_enabled(&annotations, true));
        assert!(!is_enabled(&annotations, false));
    }

    #[test]
    fn test_unrelated_annotations_defer_to_default() {
        let mut annotations: BTreeMap<String, String> = BTreeMap::new();
        annotations.insert("kubernetes.io/ingress.class".to_string(), "nginx".to_string());
        assert!(is_enabled(&annotations, true));
        assert!(!is_enabled(&annotations, false));
    }

    #[test]
    fn test_explicit_values_override_default() {
        assert!(!is_enabled(&annotated("false"), true));
        assert!(is_enabled(&annotated("true"), false));
    }

    #[test]
    fn test_values_are_case_and_whitespace_insensitive() {
        assert!(is_enabled(&annotated("TRUE "), false));
        assert!(!is_enabled(&annotated(" False"), true));
        assert!(!is_enabled(&annotated("FALSE"), true));
    }

    #[test]
    fn test_unrecognized_values_defer_to_default() {
        assert!(is_enabled(&annotated("yes"), true));
        assert!(!is_enabled(&annotated("yes"), false));
        assert!(is_enabled(&annotated(""), true));
        assert!(!is_enabled(&annotated("  "), false));
        assert!(is_enabled(&annotated("enabled"), true));
    }
}
