use clap::{Parser, Subcommand};
use qr_payload::{DecodedPayload, Decoder, DecoderConfig, TextEncoding};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR payload decoding tools")]
struct Cli {
    /// Force a text encoding instead of reading the payment selector
    #[arg(long, global = true)]
    encoding: Option<TextEncoding>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode a hex-encoded payload
    Decode {
        #[arg(long)]
        hex: String,
        #[arg(long)]
        version: u8,
    },
    /// Decode a raw binary payload file
    DecodeFile {
        #[arg(long)]
        path: PathBuf,
        #[arg(long)]
        version: u8,
    },
    /// Print segments, encoding and selector of a hex payload
    Inspect {
        #[arg(long)]
        hex: String,
        #[arg(long)]
        version: u8,
    },
    /// Decode a file of `<version> <hex>` lines in parallel
    Batch {
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let decoder = match cli.encoding {
        Some(encoding) => Decoder::with_config(DecoderConfig::with_encoding(encoding)),
        None => Decoder::from_env(),
    };

    let ok = match cli.command {
        Command::Decode { hex, version } => decode_cmd(&decoder, &hex, version),
        Command::DecodeFile { path, version } => decode_file_cmd(&decoder, &path, version),
        Command::Inspect { hex, version } => inspect_cmd(&decoder, &hex, version),
        Command::Batch { path } => batch_cmd(&decoder, &path),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact)
}

fn decode_cmd(decoder: &Decoder, input: &str, version: u8) -> bool {
    match parse_hex(input) {
        Ok(bytes) => print_decoded(decoder, &bytes, version),
        Err(err) => {
            eprintln!("Invalid hex payload: {}", err);
            false
        }
    }
}

fn decode_file_cmd(decoder: &Decoder, path: &Path, version: u8) -> bool {
    match fs::read(path) {
        Ok(bytes) => print_decoded(decoder, &bytes, version),
        Err(err) => {
            eprintln!("Failed to read {}: {}", path.display(), err);
            false
        }
    }
}

fn print_decoded(decoder: &Decoder, bytes: &[u8], version: u8) -> bool {
    match decoder.try_decode(bytes, version) {
        Ok(text) => {
            println!("{}", text);
            true
        }
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            false
        }
    }
}

fn inspect_cmd(decoder: &Decoder, input: &str, version: u8) -> bool {
    let bytes = match parse_hex(input) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Invalid hex payload: {}", err);
            return false;
        }
    };

    match decoder.decode_detailed(&bytes, version) {
        Ok(payload) => {
            print_payload(&payload, bytes.len());
            true
        }
        Err(err) => {
            eprintln!("Decode failed: {}", err);
            false
        }
    }
}

fn print_payload(payload: &DecodedPayload, byte_len: usize) {
    println!("Payload: {} bytes, version {}", byte_len, payload.version);
    println!(
        "Encoding: {} ({})",
        payload.encoding,
        if payload.selector_found {
            "from selector"
        } else {
            "default"
        }
    );
    println!("Found {} segments", payload.segments.len());
    for (i, segment) in payload.segments.iter().enumerate() {
        println!(
            "  Segment {}: mode={:?}, count={}, text={:?}{}",
            i,
            segment.mode,
            segment.character_count,
            segment.text,
            if segment.truncated { " (truncated)" } else { "" }
        );
    }
    println!("Text: {}", payload.text);
}

fn batch_cmd(decoder: &Decoder, path: &Path) -> bool {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Failed to read {}: {}", path.display(), err);
            return false;
        }
    };

    let mut payloads = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((version, payload)) = line.split_once(char::is_whitespace) else {
            eprintln!("Line {}: expected '<version> <hex>'", line_no + 1);
            return false;
        };
        let version = match version.parse::<u8>() {
            Ok(v) => v,
            Err(err) => {
                eprintln!("Line {}: bad version '{}': {}", line_no + 1, version, err);
                return false;
            }
        };
        match parse_hex(payload) {
            Ok(bytes) => payloads.push((bytes, version)),
            Err(err) => {
                eprintln!("Line {}: invalid hex payload: {}", line_no + 1, err);
                return false;
            }
        }
    }

    let start = Instant::now();
    let results = decoder.decode_batch(&payloads);
    let elapsed = start.elapsed();

    let mut failures = 0usize;
    for (i, result) in results.iter().enumerate() {
        match result {
            Some(text) => println!("{}\t{}", i, text),
            None => {
                failures += 1;
                println!("{}\t<decode failed>", i);
            }
        }
    }
    eprintln!(
        "Decoded {}/{} payloads in {:.2?}",
        results.len() - failures,
        results.len(),
        elapsed
    );
    failures == 0
}
