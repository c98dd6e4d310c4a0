//! Base converter between hexadecimal and base-4 symbol strings.
//!
//! Both directions go through `BigUint`. Its conversions for power-of-two
//! radixes work on the bit representation, so 16 ⇄ 4 stays linear in the
//! input length.

use crate::core::alphabet::Alphabet;
use crate::encoders::errors::CodecError;
use num_bigint::BigUint;
use num_traits::{Num, Zero};

/// Returns `hex` without a leading `0x`/`0X`.
pub fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

/// Converts a hexadecimal numeral to its base-4 symbol string.
///
/// An optional `0x` prefix is accepted. The result has no leading zero
/// symbol, so the value zero becomes the empty string.
///
/// # Errors
///
/// `EmptyHex` if there are no digits, `InvalidHex` on the first character
/// that is not a hex digit.
pub fn hex_to_symbols(hex: &str, alphabet: &Alphabet) -> Result<String, CodecError> {
    let digits = strip_hex_prefix(hex);
    if digits.is_empty() {
        return Err(CodecError::EmptyHex);
    }

    let offset = hex.len() - digits.len();
    if let Some((position, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(CodecError::InvalidHex {
            char: c,
            position: offset + position,
        });
    }

    let value = BigUint::from_str_radix(digits, 16).map_err(|_| CodecError::EmptyHex)?;
    if value.is_zero() {
        return Ok(String::new());
    }

    let base4 = value.to_radix_be(4);
    let mut result = String::with_capacity(base4.len());
    for digit in base4 {
        // to_radix_be(4) only yields 0..=3
        if let Some(symbol) = alphabet.encode_digit(digit) {
            result.push(symbol);
        }
    }

    Ok(result)
}

/// Converts a base-4 symbol string to a `0x`-prefixed lowercase hex numeral.
///
/// Symbols are matched ignoring case. An empty input is the value zero and
/// yields `"0x0"`. Nothing is skipped: cleaning happens before this step.
///
/// # Errors
///
/// `InvalidSymbol` on the first character outside the alphabet.
pub fn symbols_to_hex(symbols: &str, alphabet: &Alphabet) -> Result<String, CodecError> {
    let mut digits = Vec::with_capacity(symbols.len());

    for (position, c) in symbols.chars().enumerate() {
        let digit = alphabet
            .decode_char(c)
            .ok_or_else(|| CodecError::InvalidSymbol {
                char: c,
                position,
                valid_chars: alphabet.to_string(),
            })?;
        digits.push(digit);
    }

    if digits.is_empty() {
        return Ok("0x0".to_string());
    }

    let value = BigUint::from_radix_be(&digits, 4).unwrap_or_default();
    Ok(format!("0x{}", value.to_str_radix(16)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dna() -> Alphabet {
        Alphabet::dna()
    }

    #[test]
    fn test_hex_to_symbols_golden() {
        // 0x4869 = 18537 = 10201221 in base 4
        assert_eq!(hex_to_symbols("4869", &dna()).unwrap(), "CAGACGGC");
    }

    #[test]
    fn test_hex_to_symbols_drops_leading_zero_symbols() {
        assert_eq!(hex_to_symbols("30", &dna()).unwrap(), "TAA");
        assert_eq!(hex_to_symbols("000a", &dna()).unwrap(), "GG");
        assert_eq!(hex_to_symbols("0x1", &dna()).unwrap(), "C");
    }

    #[test]
    fn test_hex_to_symbols_zero_is_empty() {
        assert_eq!(hex_to_symbols("0", &dna()).unwrap(), "");
        assert_eq!(hex_to_symbols("0000", &dna()).unwrap(), "");
    }

    #[test]
    fn test_hex_to_symbols_accepts_uppercase() {
        assert_eq!(
            hex_to_symbols("FF", &dna()).unwrap(),
            hex_to_symbols("ff", &dna()).unwrap()
        );
        assert_eq!(hex_to_symbols("FF", &dna()).unwrap(), "TTTT");
    }

    #[test]
    fn test_hex_to_symbols_rejects_bad_input() {
        assert_eq!(hex_to_symbols("", &dna()), Err(CodecError::EmptyHex));
        assert_eq!(hex_to_symbols("0x", &dna()), Err(CodecError::EmptyHex));
        assert_eq!(
            hex_to_symbols("12g4", &dna()),
            Err(CodecError::InvalidHex {
                char: 'g',
                position: 2
            })
        );
        assert_eq!(
            hex_to_symbols("0x1_0", &dna()),
            Err(CodecError::InvalidHex {
                char: '_',
                position: 3
            })
        );
        assert!(hex_to_symbols("+10", &dna()).is_err());
    }

    #[test]
    fn test_symbols_to_hex_golden() {
        assert_eq!(symbols_to_hex("CAGACGGC", &dna()).unwrap(), "0x4869");
        assert_eq!(symbols_to_hex("TTTT", &dna()).unwrap(), "0xff");
    }

    #[test]
    fn test_symbols_to_hex_ignores_case() {
        let expected = symbols_to_hex("ACGT", &dna()).unwrap();
        assert_eq!(symbols_to_hex("acgt", &dna()).unwrap(), expected);
        assert_eq!(symbols_to_hex("AcGt", &dna()).unwrap(), expected);
        assert_eq!(expected, "0x1b");
    }

    #[test]
    fn test_symbols_to_hex_zero() {
        assert_eq!(symbols_to_hex("", &dna()).unwrap(), "0x0");
        assert_eq!(symbols_to_hex("AAAA", &dna()).unwrap(), "0x0");
    }

    #[test]
    fn test_symbols_to_hex_rejects_foreign_characters() {
        let err = symbols_to_hex("ACGN", &dna()).unwrap_err();
        assert_eq!(
            err,
            CodecError::InvalidSymbol {
                char: 'N',
                position: 3,
                valid_chars: "ACGT".to_string()
            }
        );
        assert!(symbols_to_hex("AC GT", &dna()).is_err());
    }

    #[test]
    fn test_conversion_is_reversible() {
        for hex in ["1", "4869", "deadbeef", "10000000000000000000000000000001"] {
            let symbols = hex_to_symbols(hex, &dna()).unwrap();
            let back = symbols_to_hex(&symbols, &dna()).unwrap();
            assert_eq!(strip_hex_prefix(&back), hex);
        }
    }

    #[test]
    fn test_large_input() {
        let hex = "ab".repeat(8192);
        let symbols = hex_to_symbols(&hex, &dna()).unwrap();
        assert_eq!(symbols.len(), hex.len() * 2);
        assert_eq!(strip_hex_prefix(&symbols_to_hex(&symbols, &dna()).unwrap()), hex);
    }
}
