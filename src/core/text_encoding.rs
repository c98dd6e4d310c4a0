use crate::encoders::errors::CodecError;
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

/// Codec name that selects raw byte handling instead of a character encoding.
pub const RAW_ENCODING: &str = "raw";

/// Names offered as suggestions when a lookup fails.
const KNOWN_NAMES: &[&str] = &[
    RAW_ENCODING,
    "utf-8",
    "utf-16le",
    "utf-16be",
    "ascii",
    "latin1",
    "iso-8859-2",
    "iso-8859-5",
    "iso-8859-15",
    "windows-1250",
    "windows-1251",
    "windows-1252",
    "koi8-r",
    "macintosh",
    "shift_jis",
    "euc-jp",
    "iso-2022-jp",
    "euc-kr",
    "gbk",
    "gb18030",
    "big5",
];

/// A resolved text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Text is taken as its raw bytes and framed through base64
    Raw,
    /// A character encoding from the WHATWG Encoding Standard
    Standard(&'static Encoding),
}

impl TextEncoding {
    pub fn utf8() -> Self {
        TextEncoding::Standard(UTF_8)
    }

    /// Resolves an encoding by name.
    ///
    /// Matching ignores case and treats `_` as `-`, so `utf_8`, `UTF-8` and
    /// `utf8` all resolve to UTF-8. Further attempts drop the separators, which
    /// lets names like `latin-1` through, and finally try the name as given
    /// (`ms_kanji`).
    ///
    /// # Errors
    ///
    /// `UnsupportedEncoding`, with a suggestion when a known name is close.
    pub fn lookup(name: &str) -> Result<Self, CodecError> {
        let lowered = name.trim().to_ascii_lowercase();
        if lowered == RAW_ENCODING {
            return Ok(TextEncoding::Raw);
        }

        let candidates = [
            lowered.replace('_', "-"),
            lowered.replace(['_', '-'], ""),
            lowered,
        ];
        candidates
            .iter()
            .find_map(|label| Encoding::for_label_no_replacement(label.as_bytes()))
            .map(TextEncoding::Standard)
            .ok_or_else(|| CodecError::unsupported_encoding(name, KNOWN_NAMES))
    }

    /// Common encoding names, for listings and suggestions.
    pub fn known_names() -> &'static [&'static str] {
        KNOWN_NAMES
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Raw => RAW_ENCODING,
            TextEncoding::Standard(encoding) => encoding.name(),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, TextEncoding::Raw)
    }

    /// Serializes text into bytes.
    ///
    /// # Errors
    ///
    /// `EncodingError` naming the first character the encoding cannot
    /// represent.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let encoding = match *self {
            TextEncoding::Raw => return Ok(text.as_bytes().to_vec()),
            TextEncoding::Standard(encoding) => encoding,
        };

        // The WHATWG encoders only ever emit UTF-8 for the UTF-16 family
        if encoding == UTF_16LE {
            return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if encoding == UTF_16BE {
            return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        let (bytes, _, had_errors) = encoding.encode(text);
        if had_errors {
            let mut buf = [0u8; 4];
            let unmappable = text
                .chars()
                .find(|c| encoding.encode(c.encode_utf8(&mut buf)).2)
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(CodecError::EncodingError {
                encoding: encoding.name().to_string(),
                char: unmappable,
            });
        }

        Ok(bytes.into_owned())
    }

    /// Deserializes bytes into text, replacing malformed sequences with
    /// U+FFFD instead of failing.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Raw => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Standard(encoding) => {
                encoding.decode_without_bom_handling(bytes).0.into_owned()
            }
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf8()
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
