use crate::encoders::errors::CodecError;

/// The canonical nucleotide ordering: `A=0, C=1, G=2, T=3`.
pub const DNA_SYMBOLS: [char; 4] = ['A', 'C', 'G', 'T'];

/// An ordered set of four symbols, one per base-4 digit.
///
/// Each symbol's value is its position. Lookups are case-insensitive, output
/// always uses the case the alphabet was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [char; 4],
}

impl Alphabet {
    /// Returns the canonical `ACGT` alphabet.
    pub fn dna() -> Self {
        Alphabet {
            symbols: DNA_SYMBOLS,
        }
    }

    /// Creates an alphabet from four symbols, in digit order.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is neither alphabetic nor ASCII-graphic,
    /// or if two symbols are equal ignoring case.
    pub fn new(symbols: [char; 4]) -> Result<Self, CodecError> {
        for (i, &c) in symbols.iter().enumerate() {
            if !(c.is_alphabetic() || c.is_ascii_graphic()) {
                return Err(CodecError::InvalidAlphabet(format!(
                    "symbol {:?} is neither a letter nor a visible ASCII character",
                    c
                )));
            }
            if symbols[..i].iter().any(|&prev| same_symbol(prev, c)) {
                return Err(CodecError::InvalidAlphabet(format!(
                    "duplicate symbol '{}'",
                    c
                )));
            }
        }

        Ok(Alphabet { symbols })
    }

    /// Creates an alphabet from a four-character string, e.g. `"ACGT"`.
    pub fn from_str(s: &str) -> Result<Self, CodecError> {
        let chars: Vec<char> = s.chars().collect();
        let symbols: [char; 4] = chars.try_into().map_err(|chars: Vec<char>| {
            CodecError::InvalidAlphabet(format!(
                "expected 4 symbols, got {}",
                chars.len()
            ))
        })?;
        Self::new(symbols)
    }

    pub fn symbols(&self) -> &[char; 4] {
        &self.symbols
    }

    /// The symbol for digit 0, used for padding and substitution.
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    /// Encodes a digit (0 to 3) as its symbol.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: u8) -> Option<char> {
        self.symbols.get(digit as usize).copied()
    }

    /// Decodes a symbol back to its digit value, ignoring case.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        self.symbols
            .iter()
            .position(|&s| same_symbol(s, c))
            .map(|i| i as u8)
    }

    pub fn contains(&self, c: char) -> bool {
        self.decode_char(c).is_some()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

fn same_symbol(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_digit_values() {
        let alphabet = Alphabet::dna();
        assert_eq!(alphabet.decode_char('A'), Some(0));
        assert_eq!(alphabet.decode_char('C'), Some(1));
        assert_eq!(alphabet.decode_char('G'), Some(2));
        assert_eq!(alphabet.decode_char('T'), Some(3));
        assert_eq!(alphabet.encode_digit(2), Some('G'));
        assert_eq!(alphabet.encode_digit(4), None);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let alphabet = Alphabet::dna();
        assert_eq!(alphabet.decode_char('g'), Some(2));
        assert_eq!(alphabet.decode_char('t'), Some(3));
        assert_eq!(alphabet.decode_char('U'), None);
        assert_eq!(alphabet.decode_char('-'), None);
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::from_str("wxyz").unwrap();
        assert_eq!(alphabet.zero_symbol(), 'w');
        assert_eq!(alphabet.decode_char('Z'), Some(3));
        assert_eq!(alphabet.encode_digit(3), Some('z'));
        assert_eq!(alphabet.to_string(), "wxyz");
    }

    #[test]
    fn test_rejects_duplicates_ignoring_case() {
        assert!(matches!(
            Alphabet::from_str("ACGa"),
            Err(CodecError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_length_and_blank() {
        assert!(Alphabet::from_str("ACG").is_err());
        assert!(Alphabet::from_str("ACGTU").is_err());
        assert!(Alphabet::from_str("AC T").is_err());
    }

    #[test]
    fn test_rejects_non_graphic_symbols() {
        for symbols in ["AC\u{7f}T", "AC\u{a0}T", "AC🧬T", "AC\u{200b}T", "AC\tT"] {
            assert!(
                matches!(Alphabet::from_str(symbols), Err(CodecError::InvalidAlphabet(_))),
                "{:?}",
                symbols
            );
        }
        // Non-ASCII letters and ASCII punctuation are fine
        assert!(Alphabet::from_str("αβγδ").is_ok());
        assert!(Alphabet::from_str("+-*/").is_ok());
    }
}
