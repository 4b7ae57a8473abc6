// ABOUTME: Identifier formatting from GraphQL names to emitted target names
// ABOUTME: Handles word splitting, exported casing, common initialisms and snake case file names

/// Words that are emitted fully upper-cased
const INITIALISMS: &[&str] = &[
    "api", "cpu", "dns", "guid", "html", "http", "https", "id", "ip", "json", "sql", "ttl", "uri",
    "url", "uuid", "xml",
];

/// Split an identifier into words on separators and case boundaries
///
/// `nrAccountID` becomes `["nr", "Account", "ID"]` and `HTTPServer`
/// becomes `["HTTP", "Server"]`.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' || c == '.' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Format a GraphQL name as an exported target identifier
pub fn export_name(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| {
            let lower = word.to_lowercase();
            if INITIALISMS.contains(&lower.as_str()) {
                return word.to_uppercase();
            }

            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Format a name as snake case, used for generated file names
pub fn snake_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
