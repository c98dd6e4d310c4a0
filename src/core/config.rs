use crate::codec::Codec;
use crate::core::alphabet::Alphabet;
use crate::core::text_encoding::TextEncoding;
use crate::encoders::errors::CodecError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Encoding used when nothing else is configured.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Per-call codec configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Text encoding name, or `"raw"`
    pub encoding: String,
    /// Replace non-symbol characters with the zero symbol instead of dropping them
    pub strict: bool,
    /// Treat text as raw bytes regardless of `encoding`
    pub raw: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            encoding: DEFAULT_ENCODING.to_string(),
            strict: false,
            raw: false,
        }
    }
}

impl CodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Resolves the effective text encoding. The raw flag wins over the name,
    /// but the name must still be a known encoding.
    pub fn text_encoding(&self) -> Result<TextEncoding, CodecError> {
        let encoding = TextEncoding::lookup(&self.encoding)?;
        if self.raw {
            return Ok(TextEncoding::Raw);
        }
        Ok(encoding)
    }
}

/// `[codec]` table of a settings file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CodecSettings {
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub strict: Option<bool>,
    #[serde(default)]
    pub raw: Option<bool>,
}

/// `[alphabet]` table of a settings file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AlphabetSettings {
    /// Four symbols in digit order, e.g. "ACGT"
    #[serde(default)]
    pub symbols: Option<String>,
}

/// Settings loaded from TOML. Every key is optional so files can be layered.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub codec: CodecSettings,
    #[serde(default)]
    pub alphabet: AlphabetSettings,
}

impl Settings {
    /// Parses settings from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, CodecError> {
        toml::from_str(content).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Built-in defaults.
    pub fn load_default() -> Result<Self, CodecError> {
        Self::from_toml(include_str!("../../codec.toml"))
    }

    /// Load settings from a file path
    pub fn load_from_file(path: &Path) -> Result<Self, CodecError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CodecError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| CodecError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Path of the per-user settings file, `~/.config/dna-codec/config.toml`.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dna-codec").join("config.toml"))
    }

    /// Load settings with user overrides from standard locations
    /// 1. Start with built-in defaults
    /// 2. Override with ~/.config/dna-codec/config.toml if it exists
    /// 3. Override with ./dna-codec.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, CodecError> {
        let mut settings = Self::load_default()?;

        let candidates = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(PathBuf::from("dna-codec.toml")));

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(layer) => {
                    tracing::debug!(path = %path.display(), "loaded settings layer");
                    settings.merge(layer);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
                }
            }
        }

        Ok(settings)
    }

    /// Merge another layer into this one. Keys set in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.codec.encoding.is_some() {
            self.codec.encoding = other.codec.encoding;
        }
        if other.codec.strict.is_some() {
            self.codec.strict = other.codec.strict;
        }
        if other.codec.raw.is_some() {
            self.codec.raw = other.codec.raw;
        }
        if other.alphabet.symbols.is_some() {
            self.alphabet.symbols = other.alphabet.symbols;
        }
    }

    pub fn codec_config(&self) -> CodecConfig {
        let defaults = CodecConfig::default();
        CodecConfig {
            encoding: self.codec.encoding.clone().unwrap_or(defaults.encoding),
            strict: self.codec.strict.unwrap_or(defaults.strict),
            raw: self.codec.raw.unwrap_or(defaults.raw),
        }
    }

    pub fn alphabet(&self) -> Result<Alphabet, CodecError> {
        match &self.alphabet.symbols {
            Some(symbols) => Alphabet::from_str(symbols),
            None => Ok(Alphabet::dna()),
        }
    }

    /// Builds a codec from these settings, validating alphabet and encoding.
    pub fn build_codec(&self) -> Result<Codec, CodecError> {
        let config = self.codec_config();
        config.text_encoding()?;
        Ok(Codec::new(self.alphabet()?, config))
    }
}
