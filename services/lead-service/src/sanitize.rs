const ENTITIES: [&str; 3] = ["&lt;", "&gt;", "&amp;"];

/// Escapes `<`, `>` and `&` for Telegram's HTML parse mode.
///
/// An `&` that already opens one of the entities produced here is kept as is,
/// so escaping twice gives the same text as escaping once.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for (index, ch) in input.char_indices() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' if ENTITIES
                .iter()
                .any(|entity| input[index..].starts_with(entity)) =>
            {
                escaped.push('&')
            }
            '&' => escaped.push_str("&amp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
