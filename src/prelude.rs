//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use dna_codec::prelude::*;
//!
//! let codec = Codec::with_config(CodecConfig::new().with_strict(true));
//! let dna = codec.encode(&Payload::from("ok")).unwrap();
//! assert_eq!(codec.decode(&dna, Mode::Text).unwrap().as_text(), Some("ok"));
//! ```

pub use crate::{
    Alphabet,
    // Façade
    Codec,
    CodecConfig,
    CodecError,
    ErrorKind,
    Mode,
    Payload,
    Settings,
    TextEncoding,
    // Lower-level steps if needed
    clean,
    decode_bytes,
    decode_text,
    encode_bytes,
    encode_text,
    hex_to_symbols,
    symbols_to_hex,
};
