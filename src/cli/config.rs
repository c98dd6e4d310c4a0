use crate::cli::args::Cli;
use dna_codec::{Codec, Settings};
use std::path::PathBuf;

/// Loads layered settings, then applies command-line overrides.
///
/// The codec name is validated here, before any input is read.
pub fn build_codec(cli: &Cli) -> Result<Codec, Box<dyn std::error::Error>> {
    let mut settings = Settings::load_with_overrides()?;

    if let Some(path) = &cli.global.config {
        let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
        settings.merge(Settings::load_from_file(&expanded)?);
    }

    if let Some(codec) = &cli.codec {
        settings.codec.encoding = Some(codec.clone());
    }
    if cli.raw {
        settings.codec.raw = Some(true);
    }
    if cli.strict {
        settings.codec.strict = Some(true);
    }

    let codec = settings.build_codec()?;
    tracing::debug!(config = ?codec.config(), alphabet = %codec.alphabet(), "codec ready");
    Ok(codec)
}
