// Display-name helpers.

/// Used when a minor author has no usable first name.
pub const FALLBACK_FIRST_NAME: &str = "Author";

/// First name plus last initial, e.g. "Jonathan S.".
///
/// Both parts are trimmed first. An empty first name becomes "Author"; an
/// empty last name drops the initial entirely.
pub fn truncate_name(first: &str, last: &str) -> String {
    let first = match first.trim() {
        "" => FALLBACK_FIRST_NAME,
        trimmed => trimmed,
    };

    match last.trim().chars().next() {
        Some(initial) => {
            let initial: String = initial.to_uppercase().collect();
            format!("{first} {initial}.")
        }
        None => first.to_string(),
    }
}

/// Untruncated "first last" as stored, for adult authors.
pub fn full_name(first: &str, last: &str) -> String {
    format!("{first} {last}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_full_name() {
        assert_eq!(truncate_name("Jonathan", "Smith"), "Jonathan S.");
    }

    #[test]
    fn test_truncate_without_last_name() {
        assert_eq!(truncate_name("Jonathan", ""), "Jonathan");
        assert_eq!(truncate_name("Jonathan", "   "), "Jonathan");
    }

    #[test]
    fn test_truncate_without_first_name() {
        assert_eq!(truncate_name("", "Smith"), "Author S.");
        assert_eq!(truncate_name("  ", ""), "Author");
    }

    #[test]
    fn test_truncate_uppercases_initial_and_trims() {
        assert_eq!(truncate_name("  maya ", " lópez"), "maya L.");
        assert_eq!(truncate_name("Émile", "ørsted"), "Émile Ø.");
    }

    #[test]
    fn test_full_name_is_verbatim() {
        assert_eq!(full_name("Ada", "Lovelace"), "Ada Lovelace");
    }
}
