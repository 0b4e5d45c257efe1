/*!
    Helpers for splitting RFC 6381 codec strings.
*/

/**
    A codec string split into its sample entry code and dot-separated parameters.

    The sample entry is lower-cased so that `fLaC`, `FLAC` and `flac` all match
    the same table row. Parameters are kept as written.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecString<'a> {
    pub entry: String,
    pub params: Vec<&'a str>,
}

impl<'a> CodecString<'a> {
    /**
        Split a codec string such as `mp4a.40.2` or `avc1.64001F`.

        Surrounding whitespace and double quotes are ignored, as is a leading
        dot (`.mp3`). Returns `None` for empty input.
    */
    pub fn parse(s: &'a str) -> Option<Self> {
        let s = clean(s);
        let s = s.strip_prefix('.').unwrap_or(s);

        let mut parts = s.split('.');
        let entry = parts.next()?.to_ascii_lowercase();
        if entry.is_empty() {
            return None;
        }

        Some(Self {
            entry,
            params: parts.collect(),
        })
    }

    /**
        Returns the parameter at `index`, skipping empty segments.
    */
    pub fn param(&self, index: usize) -> Option<&'a str> {
        self.params.get(index).copied().filter(|p| !p.is_empty())
    }
}

/**
    Trim whitespace and one layer of surrounding double quotes.
*/
pub fn clean(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(s)
        .trim()
}

pub(crate) fn parse_hex_u8(s: &str) -> Option<u8> {
    u8::from_str_radix(s, 16).ok()
}

pub(crate) fn parse_dec_u8(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
