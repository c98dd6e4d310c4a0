//! Sanitizes arbitrary text into an aligned symbol string before decoding.

use crate::core::alphabet::Alphabet;

/// Symbol strings handed to the converter are a multiple of this length.
pub const ALIGNMENT: usize = 4;

/// Cleans `input` into a well-formed symbol string.
///
/// Alphabet characters are kept in canonical case. Anything else is dropped,
/// or in `strict` mode replaced by the zero symbol so positions are kept. The
/// result is then right-padded with the zero symbol to a multiple of
/// [`ALIGNMENT`]; an already aligned result gets no padding.
pub fn clean(input: &str, strict: bool, alphabet: &Alphabet) -> String {
    let zero = alphabet.zero_symbol();
    let mut output = String::with_capacity(input.len() + ALIGNMENT);

    for c in input.chars() {
        match alphabet.decode_char(c).and_then(|d| alphabet.encode_digit(d)) {
            Some(symbol) => output.push(symbol),
            None if strict => output.push(zero),
            None => {}
        }
    }

    let count = output.chars().count();
    let padding = (ALIGNMENT - count % ALIGNMENT) % ALIGNMENT;
    output.extend(std::iter::repeat_n(zero, padding));

    output
}
