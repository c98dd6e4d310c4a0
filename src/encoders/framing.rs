//! Byte and text framing on top of the base converter.
//!
//! Every payload byte becomes exactly four symbols: the converter output is
//! left-padded with zero symbols, which leaves the numeral's value unchanged.
//! On the way back the symbol count gives the expected hex width, so leading
//! zero bytes survive the trip even though the numeral drops them.

use crate::core::alphabet::Alphabet;
use crate::core::text_encoding::TextEncoding;
use crate::encoders::base64;
use crate::encoders::errors::CodecError;
use crate::encoders::radix::{hex_to_symbols, strip_hex_prefix, symbols_to_hex};

/// Symbols produced per payload byte.
pub const SYMBOLS_PER_BYTE: usize = 4;

/// Encodes text under `encoding`. `Raw` routes through [`encode_bytes`].
pub fn encode_text(
    text: &str,
    encoding: &TextEncoding,
    alphabet: &Alphabet,
) -> Result<String, CodecError> {
    if encoding.is_raw() {
        return encode_bytes(text.as_bytes(), alphabet);
    }

    let bytes = encoding.encode(text)?;
    tracing::trace!(encoding = %encoding, bytes = bytes.len(), "serialized text");
    bytes_to_symbols(&bytes, alphabet)
}

/// Decodes symbols back to text under `encoding`, leniently.
///
/// `Raw` routes through [`decode_bytes`] and reads the result as UTF-8.
///
/// # Errors
///
/// `IncompleteInput` when the recovered hex cannot be paired into bytes.
pub fn decode_text(
    symbols: &str,
    encoding: &TextEncoding,
    alphabet: &Alphabet,
) -> Result<String, CodecError> {
    if encoding.is_raw() {
        let bytes = decode_bytes(symbols, alphabet)?;
        return Ok(TextEncoding::Raw.decode(&bytes));
    }

    let bytes = symbols_to_bytes(symbols, alphabet, |hex_digits| {
        CodecError::IncompleteInput { hex_digits }
    })?;
    Ok(encoding.decode(&bytes))
}

/// Encodes arbitrary bytes, framed through base64 first.
pub fn encode_bytes(data: &[u8], alphabet: &Alphabet) -> Result<String, CodecError> {
    let framed = base64::encode(data);
    tracing::trace!(bytes = data.len(), framed = framed.len(), "base64 framed");
    bytes_to_symbols(&framed, alphabet)
}

/// Inverse of [`encode_bytes`].
///
/// # Errors
///
/// `MalformedInput` when the recovered hex cannot be paired into bytes,
/// `InvalidIntermediateEncoding` when those bytes are not valid base64.
pub fn decode_bytes(symbols: &str, alphabet: &Alphabet) -> Result<Vec<u8>, CodecError> {
    let framed = symbols_to_bytes(symbols, alphabet, |hex_digits| {
        CodecError::MalformedInput { hex_digits }
    })?;
    base64::decode(&framed)
}

/// Renders bytes as a symbol string of exactly four symbols per byte.
pub fn bytes_to_symbols(data: &[u8], alphabet: &Alphabet) -> Result<String, CodecError> {
    if data.is_empty() {
        return Ok(String::new());
    }

    let width = data.len() * SYMBOLS_PER_BYTE;
    let symbols = hex_to_symbols(&hex::encode(data), alphabet)?;

    let mut result = String::with_capacity(width);
    let pad = width.saturating_sub(symbols.len());
    result.extend(std::iter::repeat_n(alphabet.zero_symbol(), pad));
    result.push_str(&symbols);
    Ok(result)
}

/// Recovers bytes from a symbol string.
///
/// The hex is restored to `symbols / 2` digits before pairing; an odd digit
/// count is reported through `incomplete`.
pub fn symbols_to_bytes(
    symbols: &str,
    alphabet: &Alphabet,
    incomplete: impl Fn(usize) -> CodecError,
) -> Result<Vec<u8>, CodecError> {
    let hex = symbols_to_hex(symbols, alphabet)?;
    let digits = strip_hex_prefix(&hex).trim_start_matches('0');

    let width = symbols.chars().count() / 2;
    let mut padded = String::with_capacity(width.max(digits.len()));
    padded.extend(std::iter::repeat_n('0', width.saturating_sub(digits.len())));
    padded.push_str(digits);

    if padded.len() % 2 != 0 {
        return Err(incomplete(padded.len()));
    }

    hex::decode(&padded).map_err(|_| incomplete(padded.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna() -> Alphabet {
        Alphabet::dna()
    }

    #[test]
    fn test_encode_text_golden() {
        let utf8 = TextEncoding::utf8();
        assert_eq!(encode_text("Hi", &utf8, &dna()).unwrap(), "CAGACGGC");
        assert_eq!(encode_text("", &utf8, &dna()).unwrap(), "");
    }

    #[test]
    fn test_decode_text_golden() {
        let utf8 = TextEncoding::utf8();
        assert_eq!(
            decode_text("CAGACGCCCGTACGTACGTTAGAC", &utf8, &dna()).unwrap(),
            "Hello!"
        );
    }

    #[test]
    fn test_low_first_byte_is_padded() {
        // '0' = 0x30, whose numeral is only three symbols long
        let utf8 = TextEncoding::utf8();
        let symbols = encode_text("0", &utf8, &dna()).unwrap();
        assert_eq!(symbols, "ATAA");
        assert_eq!(decode_text(&symbols, &utf8, &dna()).unwrap(), "0");
    }

    #[test]
    fn test_leading_zero_bytes_survive() {
        let utf8 = TextEncoding::utf8();
        let symbols = encode_text("\0\0\na", &utf8, &dna()).unwrap();
        assert_eq!(symbols.len(), 16);
        assert!(symbols.starts_with("AAAAAAAA"));
        assert_eq!(decode_text(&symbols, &utf8, &dna()).unwrap(), "\0\0\na");
    }

    #[test]
    fn test_decode_text_odd_hex() {
        // "CA" is 0x4: one hex digit cannot make a byte
        let err = decode_text("CA", &TextEncoding::utf8(), &dna()).unwrap_err();
        assert_eq!(err, CodecError::IncompleteInput { hex_digits: 1 });
    }

    #[test]
    fn test_decode_text_lenient() {
        // 0xff is never valid UTF-8
        let text = decode_text("TTTTCGCG", &TextEncoding::utf8(), &dna()).unwrap();
        assert_eq!(text, "\u{fffd}f");
    }

    #[test]
    fn test_decode_text_rejects_foreign_symbols() {
        let err = decode_text("CAGU", &TextEncoding::utf8(), &dna()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidSymbol { char: 'U', .. }));
    }

    #[test]
    fn test_encode_text_other_encodings() {
        let le = TextEncoding::lookup("utf-16le").unwrap();
        let symbols = encode_text("Hi", &le, &dna()).unwrap();
        assert_eq!(symbols, "CAGAAAAACGGCAAAA");
        assert_eq!(decode_text(&symbols, &le, &dna()).unwrap(), "Hi");

        let latin = TextEncoding::lookup("latin1").unwrap();
        assert!(matches!(
            encode_text("日本", &latin, &dna()),
            Err(CodecError::EncodingError { .. })
        ));
    }

    #[test]
    fn test_raw_text_goes_through_base64() {
        let symbols = encode_text("Hi", &TextEncoding::Raw, &dna()).unwrap();
        assert_eq!(symbols, encode_bytes(b"Hi", &dna()).unwrap());
        assert_eq!(decode_text(&symbols, &TextEncoding::Raw, &dna()).unwrap(), "Hi");
    }

    #[test]
    fn test_bytes_roundtrip() {
        let data: Vec<u8> = vec![0, 0, 1, 2, 255, 0, 128];
        let symbols = encode_bytes(&data, &dna()).unwrap();
        assert_eq!(symbols.len() % 4, 0);
        assert_eq!(decode_bytes(&symbols, &dna()).unwrap(), data);
    }

    #[test]
    fn test_empty_bytes() {
        assert_eq!(encode_bytes(&[], &dna()).unwrap(), "");
        assert_eq!(decode_bytes("", &dna()).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_bytes_odd_hex() {
        let err = decode_bytes("CA", &dna()).unwrap_err();
        assert_eq!(err, CodecError::MalformedInput { hex_digits: 1 });
    }

    #[test]
    fn test_decode_bytes_bad_base64() {
        // "Hello!" is not a whole base64 quantum sequence ending cleanly
        let err = decode_bytes("CAGACGCCCGTACGTACGTTAGAC", &dna()).unwrap_err();
        assert!(matches!(err, CodecError::InvalidIntermediateEncoding { .. }));
    }

    #[test]
    fn test_all_zero_symbols_keep_length() {
        let bytes = symbols_to_bytes("AAAAAAAA", &dna(), |n| CodecError::IncompleteInput {
            hex_digits: n,
        })
        .unwrap();
        assert_eq!(bytes, vec![0, 0]);
    }
}
