/// Avatar text for a participant: first letters of up to two segments of the
/// email's local part, split on `.`, `-` and `_`.
pub fn initials(email: &str) -> String {
    let local = match email.split('@').next() {
        Some(local) if !local.is_empty() => local,
        _ => email,
    };

    local
        .split(['.', '-', '_'])
        .take(2)
        .filter_map(|segment| segment.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_segments() {
        assert_eq!(initials("jane.doe@x.com"), "JD");
        assert_eq!(initials("a-b_c@x"), "AB");
        assert_eq!(initials("mary_ann.smith@mergington.edu"), "MA");
    }

    #[test]
    fn single_segment() {
        assert_eq!(initials("bob@x.com"), "B");
    }

    #[test]
    fn empty_segment_still_counts() {
        assert_eq!(initials(".bob@x.com"), "B");
        assert_eq!(initials("..bob@x.com"), "");
    }

    #[test]
    fn empty_local_part_falls_back_to_whole_string() {
        assert_eq!(initials("@example.com"), "@C");
    }

    #[test]
    fn no_at_sign() {
        assert_eq!(initials("jo.el"), "JE");
    }
}
