//! Intermediate base64 layer for byte payloads.
//!
//! Output follows the MIME layout: standard alphabet with `=` padding, a line
//! break after every 76 characters and after the last line.

use crate::encoders::errors::CodecError;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const PADDING: u8 = b'=';
const BITS_PER_CHAR: usize = 6;
const LINE_LENGTH: usize = 76;

pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let output_chars = (data.len() * 8).div_ceil(BITS_PER_CHAR);
    let padded_chars = output_chars.div_ceil(4) * 4;
    let mut body = Vec::with_capacity(padded_chars);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;

    for &byte in data {
        bit_buffer = (bit_buffer << 8) | (byte as u32);
        bits_in_buffer += 8;

        while bits_in_buffer >= BITS_PER_CHAR {
            bits_in_buffer -= BITS_PER_CHAR;
            let index = ((bit_buffer >> bits_in_buffer) & 0x3F) as usize;
            body.push(ALPHABET[index]);
        }
    }

    // Handle remaining bits
    if bits_in_buffer > 0 {
        let index = ((bit_buffer << (BITS_PER_CHAR - bits_in_buffer)) & 0x3F) as usize;
        body.push(ALPHABET[index]);
    }

    body.resize(padded_chars, PADDING);

    let mut result = Vec::with_capacity(body.len() + body.len() / LINE_LENGTH + 1);
    for line in body.chunks(LINE_LENGTH) {
        result.extend_from_slice(line);
        result.push(b'\n');
    }
    result
}

/// Decodes base64 with or without line breaks.
///
/// # Errors
///
/// `InvalidIntermediateEncoding` for bytes outside the alphabet, data after
/// padding, more than two padding characters, or a truncated final quantum.
pub fn decode(encoded: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut result = Vec::with_capacity(encoded.len() / 4 * 3);

    let mut bit_buffer = 0u32;
    let mut bits_in_buffer = 0usize;
    let mut symbols = 0usize;
    let mut padding = 0usize;

    for (offset, &byte) in encoded.iter().enumerate() {
        if byte == b'\n' || byte == b'\r' {
            continue;
        }

        symbols += 1;
        if byte == PADDING {
            padding += 1;
            continue;
        }
        if padding > 0 {
            return Err(invalid(format!("data after padding at offset {}", offset)));
        }

        let digit = decode_byte(byte)
            .ok_or_else(|| invalid(format!("unexpected byte 0x{:02x} at offset {}", byte, offset)))?;

        bit_buffer = (bit_buffer << BITS_PER_CHAR) | (digit as u32);
        bits_in_buffer += BITS_PER_CHAR;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((bit_buffer >> bits_in_buffer) as u8);
        }
    }

    if symbols % 4 != 0 {
        return Err(invalid(format!(
            "{} characters is not a whole number of quanta",
            symbols
        )));
    }
    if padding > 2 {
        return Err(invalid(format!("{} padding characters", padding)));
    }

    Ok(result)
}

fn decode_byte(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

fn invalid(reason: String) -> CodecError {
    CodecError::InvalidIntermediateEncoding { reason }
}
