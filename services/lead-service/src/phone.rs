use regex::Regex;
use std::sync::OnceLock;

// +998 XX XXX XX XX, each group optionally separated by whitespace.
const CANONICAL_PATTERN: &str = r"^\+998\s?[0-9]{2}\s?[0-9]{3}\s?[0-9]{2}\s?[0-9]{2}$";

static CANONICAL: OnceLock<Regex> = OnceLock::new();

fn canonical() -> &'static Regex {
    CANONICAL.get_or_init(|| Regex::new(CANONICAL_PATTERN).expect("phone pattern compiles"))
}

pub fn is_valid(phone: &str) -> bool {
    canonical().is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::is_valid;

    #[test]
    fn accepts_compact_and_grouped_numbers() {
        assert!(is_valid("+998901234567"));
        assert!(is_valid("+998 90 123 45 67"));
        assert!(is_valid("+99890 1234567"));
    }

    #[test]
    fn rejects_other_shapes() {
        for phone in [
            "998901234567",
            "+99890123456",
            "+9989012345678",
            "+7 901 234 56 78",
            "+998  90 123 45 67",
            "+998-90-123-45-67",
            "90 123 45 67",
            "+998 9O 123 45 67",
            "+998 ٩٠ 123 45 67",
            "",
        ] {
            assert!(!is_valid(phone), "{phone:?} should be rejected");
        }
    }
}
