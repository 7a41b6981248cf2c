/// Convert a field identifier to lowerCamelCase.
///
/// Accepts snake_case, kebab-case, PascalCase and MixedCaps with
/// initialisms. Initialisms after the first word keep only their first
/// letter uppercase, and a leading one is lowercased entirely. `IDs` is one
/// word, and a run of two known initialisms (`HTMLURL`) is split in two.
///
/// # Examples
/// ```
/// use gqlshape_core::utils::to_lower_camel_case;
/// assert_eq!(to_lower_camel_case("foo_bar"), "fooBar");
/// assert_eq!(to_lower_camel_case("FooBar"), "fooBar");
/// assert_eq!(to_lower_camel_case("ClientMutationID"), "clientMutationId");
/// assert_eq!(to_lower_camel_case("URL"), "url");
/// assert_eq!(to_lower_camel_case("DatabaseIDs"), "databaseIds");
/// ```
pub fn to_lower_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).iter().enumerate() {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        if i == 0 {
            result.push(first.to_ascii_lowercase());
        } else {
            result.push(first.to_ascii_uppercase());
        }
        result.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
    result
}

/// Split an identifier into words.
///
/// Boundaries are `_`, `-`, a lowercase letter or digit followed by an
/// uppercase letter, and the last capital of an initialism run that is
/// followed by a lowercase letter (`HTMLParser` -> `HTML`, `Parser`),
/// except for the plural `IDs`.
fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut start: Option<usize> = None;

    for (pos, &(offset, c)) in chars.iter().enumerate() {
        if matches!(c, '_' | '-') {
            if let Some(begin) = start.take() {
                push_word(&mut words, &s[begin..offset]);
            }
            continue;
        }

        let Some(begin) = start else {
            start = Some(offset);
            continue;
        };

        let prev = chars[pos - 1].1;
        let next = chars.get(pos + 1).map(|&(_, n)| n);
        let boundary = c.is_ascii_uppercase()
            && (prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase()
                    && next.is_some_and(|n| n.is_ascii_lowercase())
                    && !(prev == 'I' && c == 'D' && next == Some('s'))));

        if boundary {
            push_word(&mut words, &s[begin..offset]);
            start = Some(offset);
        }
    }

    if let Some(begin) = start {
        push_word(&mut words, &s[begin..]);
    }
    words
}

const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Push `word`, split in two if it is two adjacent known initialisms.
fn push_word<'a>(words: &mut Vec<&'a str>, word: &'a str) {
    let all_caps = word
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
    if all_caps && word.len() >= 4 && !INITIALISMS.contains(&word) {
        for mid in 2..=word.len() - 2 {
            let (head, tail) = word.split_at(mid);
            if INITIALISMS.contains(&head) && INITIALISMS.contains(&tail) {
                words.push(head);
                words.push(tail);
                return;
            }
        }
    }
    words.push(word);
}
