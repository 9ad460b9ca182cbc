//! Command-line disassembler.
//!
//! Loads a raw binary at an origin address and prints an annotated listing to
//! stdout.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use disasm6502::listing::write_listing;
use disasm6502::{Image, ListingOptions, LoadError};

#[derive(Parser, Debug)]
#[command(name = "disasm6502", version)]
#[command(about = "Disassembler and cycle counter for the 6502 microprocessor", long_about = None)]
struct Args {
    /// Apple II/Atari style output
    #[arg(short = 'a', long = "apple")]
    apple2: bool,

    /// Enable cycle counting annotations
    #[arg(short = 'c', long = "cycles")]
    cycle_counting: bool,

    /// Enable hex dump within disassembly
    #[arg(short = 'd', long)]
    hex_dump: bool,

    /// Only disassemble the first NUM_BYTES bytes
    #[arg(
        short = 'm',
        long = "max-bytes",
        value_name = "NUM_BYTES",
        value_parser = parse_number,
        default_value = "65536"
    )]
    max_bytes: u64,

    /// Enable NES register annotations
    #[arg(short = 'n', long = "nes")]
    nes_mode: bool,

    /// Set the origin (base address of disassembly)
    #[arg(
        short = 'o',
        long,
        value_name = "ORIGIN",
        value_parser = parse_number,
        default_value = "0x8000"
    )]
    origin: u64,

    /// Raw binary to disassemble
    filename: PathBuf,
}

impl Args {
    fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            cycle_counting: self.cycle_counting,
            hex_dump: self.hex_dump,
            nes_mode: self.nes_mode,
            apple2: self.apple2,
        }
    }
}

/// Parses an unsigned number the way C's `strtoul(s, _, 0)` does: `0x` for
/// hex, a leading `0` for octal, decimal otherwise.
fn parse_number(s: &str) -> Result<u64, String> {
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid number '{}': {}", s, e))
}

fn init_logging() {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        // RUST_LOG=debug shows image loading, trace shows every undefined opcode.
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_level(true)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: &Args) -> Result<()> {
    let origin = (args.origin & 0xFFFF) as u16;
    let max_bytes = usize::try_from(args.max_bytes).unwrap_or(usize::MAX);

    let image = Image::from_file(&args.filename, origin, max_bytes)?;
    tracing::debug!(
        "disassembling {} bytes from ${:04X} to ${:04X}",
        image.len(),
        image.origin(),
        image.end()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let filename = args.filename.display().to_string();

    write_listing(&mut out, &image, &args.listing_options(), &filename)
        .and_then(|()| out.flush())
        .context("failed to write listing")?;

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_status(&err))
        }
    }
}

/// 2 when the input could not be read, 1 for anything else.
fn exit_status(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<LoadError>().is_some() {
        2
    } else {
        1
    }
}
