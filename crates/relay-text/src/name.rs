/// Build a contact's display name from parts that may each be empty.
///
/// `"first last"` when both are set, otherwise whichever is set, otherwise
/// the username, otherwise `""`.
pub fn name_from_first_last_username(first: &str, last: &str, username: &str) -> String {
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{first} {last}"),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (true, true) => username.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        assert_eq!(name_from_first_last_username("Jane", "Doe", "jdoe"), "Jane Doe");
    }

    #[test]
    fn test_single_part() {
        assert_eq!(name_from_first_last_username("Jane", "", "jdoe"), "Jane");
        assert_eq!(name_from_first_last_username("", "Doe", "jdoe"), "Doe");
    }

    #[test]
    fn test_username_fallback() {
        assert_eq!(name_from_first_last_username("", "", "jdoe"), "jdoe");
        assert_eq!(name_from_first_last_username("", "", ""), "");
    }

    #[test]
    fn test_parts_not_trimmed() {
        assert_eq!(name_from_first_last_username(" ", "Doe", ""), "  Doe");
    }
}
