//! Query String Parsing
//!
//! Turns the search portion of a location into name/value pairs.

use percent_encoding::percent_decode_str;

/// Segments beyond this count are ignored
pub const PARAMETER_LIMIT: usize = 1000;

/// Parsed query parameters, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Vec<Option<String>>)>,
}

impl QueryParams {
    /// Single value of `name`.
    ///
    /// Returns `None` when the key is missing, was given without `=`,
    /// or was repeated (a repeated key holds a list, not a string).
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.get_all(name) {
            [Some(value)] => Some(value.as_str()),
            _ => None,
        }
    }

    /// Every occurrence of `name`, `None` for bare keys
    pub fn get_all(&self, name: &str) -> &[Option<String>] {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    fn push(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }
}

/// Parse a search string such as `"?detail=true&page=2"`.
///
/// One leading `?` is ignored. Never fails: anything that cannot be
/// decoded is kept as raw text.
pub fn parse_query(search: &str) -> QueryParams {
    let query = search.strip_prefix('?').unwrap_or(search);
    let mut params = QueryParams::default();

    for segment in query
        .split('&')
        .take(PARAMETER_LIMIT)
        .filter(|s| !s.is_empty())
    {
        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };
        let key = unwrap_bracketed_key(decode_component(raw_key));
        if key.is_empty() {
            continue;
        }
        params.push(key, raw_value.map(decode_component));
    }

    log::trace!("[QUERY] {:?} -> {} parameters", search, params.len());
    params
}

/// `+` becomes a space, then `%XX` escapes are decoded.
/// Malformed escapes or invalid UTF-8 leave the text undecoded.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    if has_malformed_escape(&spaced) {
        return spaced;
    }
    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// `[name]` is read as `name`; other bracket forms stay literal
fn unwrap_bracketed_key(key: String) -> String {
    let inner = key
        .strip_prefix('[')
        .and_then(|k| k.strip_suffix(']'))
        .filter(|inner| !inner.is_empty() && !inner.contains(['[', ']']))
        .map(str::to_string);
    inner.unwrap_or(key)
}

fn has_malformed_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}
