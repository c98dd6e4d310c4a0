use crate::cli::args::Cli;
use crate::cli::handlers::{Input, read_bytes, write_output};
use dna_codec::Codec;

const PROMPT: &str = "Input a DNA string to decode: > ";

pub fn handle(cli: &Cli, codec: &Codec) -> Result<(), Box<dyn std::error::Error>> {
    let input = Input::from_cli(cli)?;
    let data = read_bytes(&input, PROMPT, &cli.global)?;

    let symbols = String::from_utf8(data).map_err(|_| match &input {
        Input::File(_) => "invalid file encoding: expected UTF-8 text",
        _ => "input must be valid UTF-8 for decoding",
    })?;

    if codec.config().text_encoding()?.is_raw() {
        let decoded = codec.decode_bytes(&symbols)?;
        return write_output(&decoded, false, &cli.global);
    }

    let decoded = codec.decode_text(&symbols)?;
    let newline = !matches!(input, Input::File(_));
    write_output(decoded.as_bytes(), newline, &cli.global)
}
