mod cli;

use dna_codec::CodecError;
use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // CodecError renders its own "error:" header and hint
            if e.downcast_ref::<CodecError>().is_some() {
                eprintln!("{}", e);
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
