//! Reversible codec between bytes or text and DNA nucleotide strings.
//!
//! A payload is rendered as hex, read as one big-endian number and written out
//! in base 4 over the alphabet `A=0, C=1, G=2, T=3`. Decoding first cleans the
//! input into an aligned symbol string, then runs the same steps backwards.
//!
//! ```
//! let dna = dna_codec::encode_text("Hello!", "utf-8", false).unwrap();
//! assert_eq!(dna, "CAGACGCCCGTACGTACGTTAGAC");
//!
//! let text = dna_codec::decode_text(&dna, "utf-8", false, false).unwrap();
//! assert_eq!(text, "Hello!");
//! ```

mod codec;
mod core;
pub mod encoders;
pub mod logging;
pub mod prelude;

pub use codec::{Codec, Mode, Payload};
pub use crate::core::alphabet::{Alphabet, DNA_SYMBOLS};
pub use crate::core::config::{
    AlphabetSettings, CodecConfig, CodecSettings, DEFAULT_ENCODING, Settings,
};
pub use crate::core::text_encoding::{RAW_ENCODING, TextEncoding};
pub use encoders::cleaner::clean;
pub use encoders::errors::{CodecError, ErrorKind};
pub use encoders::radix::{hex_to_symbols, symbols_to_hex};

pub type Result<T> = std::result::Result<T, CodecError>;

/// Encodes text under the named encoding, or as raw bytes when `raw` is set.
pub fn encode_text(text: &str, encoding: &str, raw: bool) -> Result<String> {
    let config = CodecConfig::new().with_encoding(encoding).with_raw(raw);
    Codec::with_config(config).encode_text(text)
}

/// Cleans and decodes a nucleotide string back to text.
pub fn decode_text(symbols: &str, encoding: &str, raw: bool, strict: bool) -> Result<String> {
    let config = CodecConfig::new()
        .with_encoding(encoding)
        .with_raw(raw)
        .with_strict(strict);
    Codec::with_config(config).decode_text(symbols)
}

/// Encodes arbitrary bytes.
pub fn encode_bytes(buf: &[u8]) -> Result<String> {
    Codec::default().encode_bytes(buf)
}

/// Cleans (non-strict) and decodes a nucleotide string back to bytes.
pub fn decode_bytes(symbols: &str) -> Result<Vec<u8>> {
    Codec::default().decode_bytes(symbols)
}
