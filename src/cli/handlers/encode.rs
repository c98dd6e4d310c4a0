use crate::cli::args::Cli;
use crate::cli::handlers::{Input, read_bytes, write_output};
use dna_codec::Codec;

const PROMPT: &str = "Input a UTF-8 string to encode into DNA: > ";

pub fn handle(cli: &Cli, codec: &Codec) -> Result<(), Box<dyn std::error::Error>> {
    let input = Input::from_cli(cli)?;
    let data = read_bytes(&input, PROMPT, &cli.global)?;

    // Raw input skips character decoding entirely, so any byte survives
    let encoded = if codec.config().text_encoding()?.is_raw() {
        codec.encode_bytes(&data)?
    } else {
        codec.encode_text(&String::from_utf8_lossy(&data))?
    };

    write_output(encoded.as_bytes(), true, &cli.global)
}
