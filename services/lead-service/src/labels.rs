// Display text for the enumerated form answers. Unknown values render as sent.

pub fn purpose_label(value: &str) -> &str {
    match value {
        "university" => "Germaniya universitetlariga kirish",
        "work" => "Germaniyada ishlash",
        "other" => "Boshqa maqsadlar",
        raw => raw,
    }
}

pub fn attendance_label(value: &str) -> &str {
    match value {
        "yes" => "Ha, albatta",
        "maybe" => "Sal uzoqroq, lekin qatnab o'qiy olaman",
        "no" => "Yo'q, Toshkentda yashamayman",
        raw => raw,
    }
}

pub fn plan_label(value: &str) -> &str {
    match value {
        "yes" => "Ha, aniq rejam bor",
        "maybe" => "Hali qaror qabul qilmaganman",
        "no" => "Yo'q, boshqa oyda topshiraman",
        raw => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_values() {
        assert_eq!(purpose_label("work"), "Germaniyada ishlash");
        assert_eq!(attendance_label("yes"), "Ha, albatta");
        assert_eq!(plan_label("maybe"), "Hali qaror qabul qilmaganman");
    }

    #[test]
    fn unknown_values_pass_through() {
        assert_eq!(purpose_label("travel"), "travel");
        assert_eq!(attendance_label(""), "");
        assert_eq!(plan_label("YES"), "YES");
    }
}
