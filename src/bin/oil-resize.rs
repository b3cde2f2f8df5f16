//! CLI demonstrator: `oil-resize WIDTH HEIGHT [FILE]`.
//!
//! Reads an 8-bit binary PPM (`P6`) from `FILE` or stdin, resamples it to
//! `WIDTH x HEIGHT`, and writes a PPM to stdout. This binary is outside the
//! core (spec §1/§6): it only wires the core up to a concrete container
//! format and owns no resampling logic of its own. PNG/JPEG/GIF decoding is
//! out of scope; files bearing another signature are rejected with a
//! one-line diagnostic.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use oil_resample::{Colorspace, PpmReader, PpmWriter, RowSink, RowSource, Scaler};

#[derive(Parser)]
#[command(about = "Resample a PPM image")]
struct Args {
    /// Destination width.
    width: usize,
    /// Destination height.
    height: usize,
    /// Input file; reads stdin if omitted.
    file: Option<String>,
}

fn open_input(path: Option<&str>) -> io::Result<Box<dyn Read>> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn run(args: Args) -> io::Result<()> {
    let input = open_input(args.file.as_deref())?;
    let mut reader = BufReader::new(input);

    // Signature hint: only binary PPM (`P6`) is implemented in-tree; PNG/JPEG
    // would be dispatched here by a host embedding this core, not by it.
    let mut sig = [0u8; 2];
    reader.read_exact(&mut sig)?;
    if &sig != b"P6" {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "unrecognized image signature; only binary PPM (P6) is supported by this demonstrator",
        ));
    }
    let mut rest = Vec::new();
    rest.extend_from_slice(&sig);
    reader.read_to_end(&mut rest)?;
    let mut source = PpmReader::new(io::Cursor::new(rest))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let (win, hin, cs) = source.header();
    debug_assert_eq!(cs, Colorspace::Rgb);

    let mut scaler = Scaler::new(hin, args.height, win, args.width, cs)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let stdout = io::stdout();
    let mut sink = PpmWriter::new(BufWriter::new(stdout.lock()), args.width, args.height)?;

    let channels = cs.channels();
    let mut in_row = vec![0u8; win * channels];
    let mut out_row = vec![0u8; args.width * channels];
    let mut next_row = 0usize;

    while !scaler.is_done() {
        while scaler.slots_needed() > 0 {
            source.read_row(&mut in_row)?;
            scaler.push_row(&in_row);
            next_row += 1;
        }
        scaler.emit(&mut out_row);
        sink.write_row(&out_row)?;
    }
    debug_assert_eq!(next_row, hin);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("oil-resize: {e}");
            ExitCode::FAILURE
        }
    }
}
