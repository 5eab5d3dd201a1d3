/// Normalize a raw status code into a display label.
///
/// Every underscore and hyphen becomes a space, then the whole string is
/// capitalized as a single unit: first character uppercase, remainder
/// lowercase. `CREATE_FAILED` becomes `Create failed`, `shutting-down`
/// becomes `Shutting down`.
///
/// Total over any input; an absent status normalizes to an empty label.
pub fn format_status(status: Option<&str>) -> String {
    let Some(status) = status else {
        return String::new();
    };

    let spaced = status.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_underscores_and_capitalizes() {
        assert_eq!(format_status(Some("CREATE_FAILED")), "Create failed");
        assert_eq!(format_status(Some("IMPORT_ROLLBACK_COMPLETE")), "Import rollback complete");
    }

    #[test]
    fn test_replaces_hyphens() {
        assert_eq!(format_status(Some("shutting-down")), "Shutting down");
    }

    #[test]
    fn test_absent_input_is_empty() {
        assert_eq!(format_status(None), "");
        assert_eq!(format_status(Some("")), "");
    }

    #[test]
    fn test_single_word_codes() {
        assert_eq!(format_status(Some("RUNNING")), "Running");
        assert_eq!(format_status(Some("pending")), "Pending");
    }

    #[test]
    fn test_capitalizes_as_one_unit_not_per_word() {
        // Only the leading word keeps its capital; the rest are lowercased.
        assert_eq!(format_status(Some("OUT_OF_MEMORY")), "Out of memory");
        assert_eq!(format_status(Some("Mixed_Case-input")), "Mixed case input");
    }
}
