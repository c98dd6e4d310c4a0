mod args;
mod config;
mod global;
mod handlers;

use args::Cli;
use dna_codec::TextEncoding;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args(std::env::args_os());
    dna_codec::logging::init_logging(cli.global.verbose);

    if cli.list {
        println!("Known codecs (any WHATWG encoding label is accepted):\n");
        for name in TextEncoding::known_names() {
            println!("  {}", name);
        }
        return Ok(());
    }

    let codec = config::build_codec(&cli)?;

    if cli.decode {
        handlers::decode::handle(&cli, &codec)
    } else {
        handlers::encode::handle(&cli, &codec)
    }
}
