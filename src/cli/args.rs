use crate::cli::global::GlobalArgs;
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "dna-codec")]
#[command(version)]
#[command(
    about = "Encode or decode any string or file to a sequence of DNA, and vice versa",
    long_about = None,
    after_help = "Examples:\n  dna-codec \"Biology is actually my least favorite subject\" --encode --string\n  dna-codec input.txt --encode --file\n  dna-codec CAGACGCCCGTACGTACGTTAGAC --decode --string"
)]
pub struct Cli {
    /// Text to process, or a path with --file (prompts or reads stdin if omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Encode input to DNA [default]
    #[arg(long, overrides_with = "decode")]
    pub encode: bool,

    /// Decode DNA back to text or bytes
    #[arg(long, overrides_with = "encode")]
    pub decode: bool,

    /// Text encoding to use (any WHATWG label, e.g. utf-8, utf-16le, latin1)
    #[arg(long, value_name = "CODEC")]
    pub codec: Option<String>,

    /// Use INPUT as the string to process [default]
    #[arg(long, overrides_with = "file")]
    pub string: bool,

    /// Use INPUT as a file path
    #[arg(long, overrides_with = "string")]
    pub file: bool,

    /// Treat input as raw bytes instead of text
    #[arg(long)]
    pub raw: bool,

    /// Pad invalid characters when decoding rather than skipping them
    #[arg(long)]
    pub strict: bool,

    /// List well-known codec names
    #[arg(short, long)]
    pub list: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}

impl Cli {
    /// Parses arguments, also accepting the `--codec:<name>` spelling.
    pub fn parse_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::parse_from(args.into_iter().map(normalize_arg))
    }
}

fn normalize_arg(arg: OsString) -> OsString {
    match arg.to_str().and_then(|s| s.strip_prefix("--codec:")) {
        Some(name) => OsString::from(format!("--codec={}", name)),
        None => arg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_args(
            std::iter::once("dna-codec")
                .chain(args.iter().copied())
                .map(OsString::from),
        )
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["hello"]);
        assert_eq!(cli.input.as_deref(), Some("hello"));
        assert!(!cli.decode);
        assert!(!cli.file);
        assert!(cli.codec.is_none());
    }

    #[test]
    fn test_colon_codec_spelling() {
        let cli = parse(&["hello", "--codec:latin1"]);
        assert_eq!(cli.codec.as_deref(), Some("latin1"));
    }

    #[test]
    fn test_last_mode_flag_wins() {
        let cli = parse(&["x", "--decode", "--encode"]);
        assert!(cli.encode);
        assert!(!cli.decode);

        let cli = parse(&["x", "--file", "--string"]);
        assert!(!cli.file);
    }
}
