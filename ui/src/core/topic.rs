//! Display formatting for topic (tag) names.
//!
//! Tags are ASCII on the wire. Cyrillic tags are transliterated and carry a
//! `ru--` prefix; for display they are mapped back to Cyrillic.

const CYRILLIC_PREFIX: &str = "ru--";

/// Latin sequence → Cyrillic letter. Longer sequences are tried first.
const TABLE: &[(&str, char)] = &[
    ("shch", 'щ'),
    ("sh", 'ш'),
    ("ch", 'ч'),
    ("cz", 'ц'),
    ("ij", 'й'),
    ("yo", 'ё'),
    ("ye", 'э'),
    ("yu", 'ю'),
    ("ya", 'я'),
    ("kh", 'х'),
    ("zh", 'ж'),
    ("xx", 'ъ'),
    ("a", 'а'),
    ("b", 'б'),
    ("v", 'в'),
    ("g", 'г'),
    ("d", 'д'),
    ("e", 'е'),
    ("z", 'з'),
    ("i", 'и'),
    ("k", 'к'),
    ("l", 'л'),
    ("m", 'м'),
    ("n", 'н'),
    ("o", 'о'),
    ("p", 'п'),
    ("r", 'р'),
    ("s", 'с'),
    ("t", 'т'),
    ("u", 'у'),
    ("f", 'ф'),
    ("y", 'ы'),
    ("x", 'ь'),
    // Short forms found in older tags.
    ("c", 'ц'),
    ("w", 'щ'),
    ("j", 'ь'),
];

/// Human-readable form of a topic; non-prefixed topics are returned unchanged.
pub fn display_topic(topic: &str) -> String {
    match topic.strip_prefix(CYRILLIC_PREFIX) {
        Some(rest) => detransliterate(rest),
        None => topic.to_string(),
    }
}

fn detransliterate(latin: &str) -> String {
    let mut out = String::with_capacity(latin.len() * 2);
    let mut rest = latin;
    while !rest.is_empty() {
        if let Some((seq, cyr)) = TABLE.iter().find(|(seq, _)| rest.starts_with(seq)) {
            out.push(*cyr);
            rest = &rest[seq.len()..];
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }
    }
    out
}
