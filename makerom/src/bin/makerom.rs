use std::path::PathBuf;
use std::process::ExitCode;

use rom_lib::{make_rom, parse_size, save, ListingConfig};

use anyhow::Context;
use clap::Parser;
use clap_stdin::FileOrStdin;

/// Compiles hex byte code into a 6502 ROM image
#[derive(Parser)]
#[command(about)]
struct Args {
    /// Byte code to compile, "-" for stdin (defaults to no source)
    #[arg(long, short = 'i')]
    source: Option<FileOrStdin>,

    /// Size of the ROM file, usually a power of 2; decimal or 0x-prefixed hex
    #[arg(long, short, value_parser = parse_size)]
    size: usize,

    /// File name to output to
    #[arg(long, short, default_value = "rom.bin")]
    output: PathBuf,

    /// Separator between two bytes
    #[arg(long, default_value_t = ListingConfig::DEFAULT_SEP)]
    sep: char,

    /// Marker starting a comment that runs to the end of the line
    #[arg(long, default_value_t = ListingConfig::DEFAULT_COMMENT)]
    comment: char,

    /// Print a hexdump of the ROM once it's saved
    #[arg(long)]
    hexdump: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = ListingConfig::new(args.sep, args.comment)?;

    let source = args
        .source
        .map(FileOrStdin::contents)
        .transpose()
        .context("can't read source")?;

    let rom = make_rom(source.as_deref(), args.size, &config)?;
    save(&rom, &args.output)?;

    if args.hexdump {
        print!("{}", rom.hexdump());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
