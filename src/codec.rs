use crate::core::alphabet::Alphabet;
use crate::core::config::CodecConfig;
use crate::encoders::cleaner::clean;
use crate::encoders::errors::CodecError;
use crate::encoders::framing;

/// Whether a payload is text under a character encoding or opaque bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Bytes,
}

/// Data on the plain side of the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    pub fn mode(&self) -> Mode {
        match self {
            Payload::Text(_) => Mode::Text,
            Payload::Bytes(_) => Mode::Bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Bytes(_) => None,
        }
    }

    /// Returns the payload's bytes; text is returned as UTF-8.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Payload::Text(text) => text.into_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

/// Composes cleaner, base converter and framer under one configuration.
///
/// A `Codec` holds no mutable state, so one value can serve any number of
/// calls, from any number of threads.
///
/// # Example
///
/// ```
/// use dna_codec::{Codec, CodecConfig, Alphabet};
///
/// let codec = Codec::new(Alphabet::dna(), CodecConfig::default());
/// let dna = codec.encode_text("Hi").unwrap();
/// assert_eq!(dna, "CAGACGGC");
/// assert_eq!(codec.decode_text("cag acg gc").unwrap(), "Hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Codec {
    alphabet: Alphabet,
    config: CodecConfig,
}

impl Codec {
    pub fn new(alphabet: Alphabet, config: CodecConfig) -> Self {
        Codec { alphabet, config }
    }

    /// A codec over the DNA alphabet.
    pub fn with_config(config: CodecConfig) -> Self {
        Self::new(Alphabet::dna(), config)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes a payload; its variant picks the mode.
    pub fn encode(&self, payload: &Payload) -> Result<String, CodecError> {
        match payload {
            Payload::Text(text) => self.encode_text(text),
            Payload::Bytes(bytes) => self.encode_bytes(bytes),
        }
    }

    /// Decodes a symbol string into a payload of the given mode.
    pub fn decode(&self, symbols: &str, mode: Mode) -> Result<Payload, CodecError> {
        match mode {
            Mode::Text => self.decode_text(symbols).map(Payload::Text),
            Mode::Bytes => self.decode_bytes(symbols).map(Payload::Bytes),
        }
    }

    pub fn encode_text(&self, text: &str) -> Result<String, CodecError> {
        let encoding = self.config.text_encoding()?;
        let _span = tracing::debug_span!("encode_text", encoding = %encoding).entered();

        let symbols = framing::encode_text(text, &encoding, &self.alphabet)?;
        tracing::debug!(input = text.len(), output = symbols.len(), "encoded text");
        Ok(symbols)
    }

    /// Cleans `symbols` and decodes them as text.
    pub fn decode_text(&self, symbols: &str) -> Result<String, CodecError> {
        let encoding = self.config.text_encoding()?;
        let _span =
            tracing::debug_span!("decode_text", encoding = %encoding, strict = self.config.strict)
                .entered();

        let cleaned = clean(symbols, self.config.strict, &self.alphabet);
        tracing::trace!(input = symbols.len(), cleaned = cleaned.len(), "cleaned input");

        let text = framing::decode_text(&cleaned, &encoding, &self.alphabet)?;
        tracing::debug!(output = text.len(), "decoded text");
        Ok(text)
    }

    pub fn encode_bytes(&self, data: &[u8]) -> Result<String, CodecError> {
        let _span = tracing::debug_span!("encode_bytes").entered();

        let symbols = framing::encode_bytes(data, &self.alphabet)?;
        tracing::debug!(input = data.len(), output = symbols.len(), "encoded bytes");
        Ok(symbols)
    }

    /// Cleans `symbols` and decodes them as base64-framed bytes.
    pub fn decode_bytes(&self, symbols: &str) -> Result<Vec<u8>, CodecError> {
        let _span = tracing::debug_span!("decode_bytes", strict = self.config.strict).entered();

        let cleaned = clean(symbols, self.config.strict, &self.alphabet);
        tracing::trace!(input = symbols.len(), cleaned = cleaned.len(), "cleaned input");

        let data = framing::decode_bytes(&cleaned, &self.alphabet)?;
        tracing::debug!(output = data.len(), "decoded bytes");
        Ok(data)
    }
}
