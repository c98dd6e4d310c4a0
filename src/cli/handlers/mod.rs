pub mod decode;
pub mod encode;

use crate::cli::args::Cli;
use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};

/// Where the input comes from.
pub enum Input {
    /// Text given on the command line
    Argument(String),
    /// A file path given with --file
    File(String),
    /// Nothing given: prompt on a terminal, otherwise read stdin to the end
    Stdin,
}

impl Input {
    pub fn from_cli(cli: &Cli) -> Result<Self, Box<dyn std::error::Error>> {
        match (&cli.input, cli.file) {
            (Some(path), true) => Ok(Input::File(path.clone())),
            (None, true) => Err("--file needs an INPUT path".into()),
            (Some(text), false) => Ok(Input::Argument(text.clone())),
            (None, false) => Ok(Input::Stdin),
        }
    }
}

/// Reads input bytes, enforcing the size limit for files and stdin.
pub fn read_bytes(
    input: &Input,
    prompt: &str,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match input {
        Input::Argument(text) => Ok(text.clone().into_bytes()),
        Input::File(path) => {
            check_file_size(path, global)?;
            Ok(fs::read(path)?)
        }
        Input::Stdin => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprint!("{}", prompt);
                io::stderr().flush()?;
                let mut line = String::new();
                stdin.lock().read_line(&mut line)?;
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                return Ok(line.into_bytes());
            }

            let mut buffer = Vec::new();
            stdin.lock().read_to_end(&mut buffer)?;

            // Check stdin size after reading
            if global.max_size > 0 && buffer.len() > global.max_size {
                return Err(format!(
                    "Input size ({} bytes) exceeds maximum ({} bytes). Use --file with --force for large inputs.",
                    buffer.len(),
                    global.max_size
                )
                .into());
            }

            Ok(buffer)
        }
    }
}

fn check_file_size(path: &str, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if global.max_size == 0 {
        return Ok(());
    }

    let file_size = fs::metadata(path)?.len() as usize;
    if file_size <= global.max_size {
        return Ok(());
    }

    if global.force {
        if !global.quiet {
            tracing::warn!(
                "processing large file ({} bytes, limit: {} bytes)",
                file_size,
                global.max_size
            );
        }
        Ok(())
    } else {
        Err(format!(
            "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            file_size, global.max_size
        )
        .into())
    }
}

/// Writes the result to --output, or to stdout (text gets a trailing newline).
pub fn write_output(
    data: &[u8],
    newline: bool,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &global.output {
        fs::write(path, data)?;
        if !global.quiet {
            tracing::info!(path = %path.display(), bytes = data.len(), "wrote output");
        }
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(data)?;
    if newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
