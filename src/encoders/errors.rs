use std::fmt;

/// Broad error categories, for callers that branch on the kind of failure
/// rather than on its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidHex,
    UnsupportedEncoding,
    EncodingError,
    IncompleteInput,
    MalformedInput,
    InvalidIntermediateEncoding,
    InvalidAlphabet,
    Config,
}

/// Errors produced by the codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A hex string contains a character that is not a hex digit
    InvalidHex { char: char, position: usize },
    /// A hex string has no digits at all
    EmptyHex,
    /// A symbol string contains a character outside the alphabet
    InvalidSymbol {
        char: char,
        position: usize,
        valid_chars: String,
    },
    /// The requested text encoding is not known
    UnsupportedEncoding {
        name: String,
        suggestion: Option<String>,
    },
    /// The text contains a character the encoding cannot represent
    EncodingError { encoding: String, char: char },
    /// Decoded hex cannot be paired into whole bytes (text path)
    IncompleteInput { hex_digits: usize },
    /// Decoded hex cannot be paired into whole bytes (byte path)
    MalformedInput { hex_digits: usize },
    /// The intermediate base64 layer rejected the recovered data
    InvalidIntermediateEncoding { reason: String },
    /// The alphabet definition is unusable
    InvalidAlphabet(String),
    /// A settings file could not be read or parsed
    Config(String),
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidHex { .. } | CodecError::EmptyHex | CodecError::InvalidSymbol { .. } => {
                ErrorKind::InvalidHex
            }
            CodecError::UnsupportedEncoding { .. } => ErrorKind::UnsupportedEncoding,
            CodecError::EncodingError { .. } => ErrorKind::EncodingError,
            CodecError::IncompleteInput { .. } => ErrorKind::IncompleteInput,
            CodecError::MalformedInput { .. } => ErrorKind::MalformedInput,
            CodecError::InvalidIntermediateEncoding { .. } => ErrorKind::InvalidIntermediateEncoding,
            CodecError::InvalidAlphabet(_) => ErrorKind::InvalidAlphabet,
            CodecError::Config(_) => ErrorKind::Config,
        }
    }

    /// Create an UnsupportedEncoding error, suggesting the closest known name
    pub fn unsupported_encoding(name: &str, known: &[&str]) -> Self {
        CodecError::UnsupportedEncoding {
            name: name.to_string(),
            suggestion: find_closest_name(name, known),
        }
    }

    fn hint(&self) -> Option<String> {
        match self {
            CodecError::InvalidSymbol { valid_chars, .. } => {
                Some(format!("valid characters: {} (any case)", valid_chars))
            }
            CodecError::UnsupportedEncoding {
                suggestion: Some(suggestion),
                ..
            } => Some(format!("did you mean '{}'?", suggestion)),
            CodecError::UnsupportedEncoding { suggestion: None, .. } => {
                Some("use a WHATWG encoding label such as utf-8, utf-16le or latin1, or 'raw'".to_string())
            }
            CodecError::EncodingError { .. } => {
                Some("pick an encoding that covers the input, or use --raw".to_string())
            }
            CodecError::IncompleteInput { .. } | CodecError::MalformedInput { .. } => {
                Some("the input may be truncated; try --strict to keep its length".to_string())
            }
            _ => None,
        }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            write!(f, "\x1b[1;31merror:\x1b[0m ")?;
        } else {
            write!(f, "error: ")?;
        }

        match self {
            CodecError::InvalidHex { char: c, position } => {
                write!(f, "invalid hexadecimal digit '{}' at position {}", c, position)?
            }
            CodecError::EmptyHex => write!(f, "invalid hexadecimal: no digits")?,
            CodecError::InvalidSymbol {
                char: c, position, ..
            } => write!(f, "invalid nucleotide '{}' at position {}", c, position)?,
            CodecError::UnsupportedEncoding { name, .. } => {
                write!(f, "unknown codec \"{}\"", name)?
            }
            CodecError::EncodingError { encoding, char: c } => write!(
                f,
                "character {:?} (U+{:04X}) cannot be encoded as {}",
                c, *c as u32, encoding
            )?,
            CodecError::IncompleteInput { hex_digits } => write!(
                f,
                "incomplete input: {} hex digits do not form whole bytes",
                hex_digits
            )?,
            CodecError::MalformedInput { hex_digits } => write!(
                f,
                "bad input: {} hex digits do not form whole bytes",
                hex_digits
            )?,
            CodecError::InvalidIntermediateEncoding { reason } => {
                write!(f, "bad input: invalid base64 payload ({})", reason)?
            }
            CodecError::InvalidAlphabet(msg) => write!(f, "invalid alphabet: {}", msg)?,
            CodecError::Config(msg) => write!(f, "config: {}", msg)?,
        }

        if let Some(hint) = self.hint() {
            writeln!(f)?;
            if use_color {
                write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)?;
            } else {
                write!(f, "hint: {}", hint)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for CodecError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching name, if any is within a couple of edits
pub fn find_closest_name(name: &str, available: &[&str]) -> Option<String> {
    let name = name.to_ascii_lowercase();
    let threshold = if name.len() < 5 { 1 } else { 2 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(&name, candidate);
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.to_string());
        }
    }

    best_match
}
