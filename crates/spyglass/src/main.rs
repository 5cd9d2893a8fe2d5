use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use spyglass_core::arch::Arch;
use spyglass_core::classify::classify;
use spyglass_core::maps::parse_maps;
use spyglass_core::memory::{read_c_string, SliceSource, DEFAULT_C_STRING_LIMIT};
use spyglass_core::pattern::{cyclic_find, cyclic_pattern, DEFAULT_CYCLE};
use spyglass_core::style::{classification_color, paint, Color, ColorMode};
use spyglass_core::types::Address;
use spyglass_utils::{info, init_logging};

/// Memory classification and string extraction helpers for debugger workflows.
#[derive(Parser, Debug)]
#[command(name = "spyglass")]
#[command(version)]
#[command(about = "Memory classification and string extraction helpers for debugger workflows", long_about = None)]
struct Cli
{
    /// Disable ANSI colors in output
    #[arg(long, global = true, default_value_t = false)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Classify an address against a maps snapshot
    Classify
    {
        /// Path to a /proc/<pid>/maps snapshot file
        #[arg(long)]
        maps: PathBuf,
        /// Address to classify (hex format: 0x1000 or decimal)
        address: String,
    },
    /// List the regions in a maps snapshot
    Regions
    {
        /// Path to a /proc/<pid>/maps snapshot file
        #[arg(long)]
        maps: PathBuf,
    },
    /// Read a nul-terminated string from a memory dump file
    Cstring
    {
        /// Path to the dump file
        #[arg(long)]
        file: PathBuf,
        /// Byte offset into the dump (hex format: 0x10 or decimal)
        offset: String,
        /// Maximum bytes to read (default: 256)
        #[arg(short, long, default_value_t = DEFAULT_C_STRING_LIMIT)]
        limit: usize,
    },
    /// Generate or search a De Bruijn cyclic pattern
    Pattern
    {
        #[command(subcommand)]
        command: PatternCommands,
    },
}

#[derive(Subcommand, Debug)]
enum PatternCommands
{
    /// Generate a cyclic pattern
    Create
    {
        /// Pattern length in bytes
        length: usize,
        /// Unique subsequence length; defaults to the pointer width of
        /// --arch, or 4
        #[arg(long)]
        cycle: Option<usize>,
        /// Target triple or architecture name (e.g. x86_64, aarch64)
        #[arg(long)]
        arch: Option<String>,
    },
    /// Find the offset of a value inside a cyclic pattern
    Search
    {
        /// Value to search for: hex (0x6161616a) or literal text
        value: String,
        /// Pattern length to search within
        #[arg(long, default_value_t = 0x10000)]
        length: usize,
        /// Unique subsequence length; defaults to the pointer width of
        /// --arch, or 4
        #[arg(long)]
        cycle: Option<usize>,
        /// Target triple or architecture name (e.g. x86_64, aarch64)
        #[arg(long)]
        arch: Option<String>,
    },
}

fn main()
{
    // Initialize logging (reads from RUST_LOG env var)
    // Defaults to INFO level and Pretty format if not set
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();

    if let Err(e) = run_command(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>>
{
    let mode = if cli.no_color { ColorMode::Never } else { ColorMode::Always };

    match cli.command {
        Commands::Classify { maps, address } => {
            let address = Address::from(parse_integer(&address)?);
            let snapshot = parse_maps(&fs::read_to_string(maps)?)?;
            info!(regions = snapshot.len(), "loaded maps snapshot");

            let classification = classify(address, Some(&snapshot));
            let rendered = match classification_color(classification) {
                Some(color) => paint(&address.to_string(), color, mode),
                None => address.to_string(),
            };
            println!(
                "{rendered} code={} stack={} heap={}",
                classification.is_code, classification.is_stack, classification.is_heap
            );
        }
        Commands::Regions { maps } => {
            let snapshot = parse_maps(&fs::read_to_string(maps)?)?;
            for region in &snapshot {
                let line = region.to_string();
                let classification = classify(region.start, Some(&snapshot));
                match classification_color(classification) {
                    Some(color) => println!("{}", paint(&line, color, mode)),
                    None => println!("{line}"),
                }
            }
        }
        Commands::Cstring { file, offset, limit } => {
            let offset = parse_integer(&offset)?;
            let data = fs::read(file)?;
            let source = SliceSource::new(Address::ZERO, &data);
            let string = read_c_string(&source, Address::from(offset), limit);
            if string.is_empty() {
                println!("{}", paint("(no readable string)", Color::Grey, mode));
            } else {
                println!("\"{}\"", paint(&string, Color::Yellow, mode));
            }
        }
        Commands::Pattern { command } => run_pattern_command(command)?,
    }

    Ok(())
}

fn run_pattern_command(command: PatternCommands) -> Result<(), Box<dyn std::error::Error>>
{
    match command {
        PatternCommands::Create { length, cycle, arch } => {
            let cycle = resolve_cycle(cycle, arch.as_deref())?;
            let pattern = cyclic_pattern(length, cycle);
            println!("{}", String::from_utf8_lossy(&pattern));
        }
        PatternCommands::Search {
            value,
            length,
            cycle,
            arch,
        } => {
            let cycle = resolve_cycle(cycle, arch.as_deref())?;
            let needle = parse_needle(&value, cycle)?;
            match cyclic_find(&needle, length, cycle) {
                Some(offset) => println!("offset: {offset} (0x{offset:x})"),
                None => println!("value not found in the first {length} pattern bytes"),
            }
        }
    }
    Ok(())
}

/// Cycle length from an explicit flag, a target architecture, or the default
fn resolve_cycle(cycle: Option<usize>, arch: Option<&str>) -> Result<usize, Box<dyn std::error::Error>>
{
    if let Some(cycle) = cycle {
        return Ok(cycle);
    }
    match arch {
        Some(triple) => Ok(Arch::from_triple(triple)?.pointer_width()),
        None => Ok(DEFAULT_CYCLE),
    }
}

/// Interpret a search value as pattern bytes
///
/// Hex values are taken as little-endian register contents truncated to the
/// cycle width; anything else is searched as literal text.
fn parse_needle(value: &str, cycle: usize) -> Result<Vec<u8>, Box<dyn std::error::Error>>
{
    if let Some(hex) = value.strip_prefix("0x") {
        let numeric = u64::from_str_radix(hex, 16)?;
        let bytes = numeric.to_le_bytes();
        Ok(bytes[..cycle.min(bytes.len())].to_vec())
    } else {
        Ok(value.as_bytes().to_vec())
    }
}

/// Parse a hex (0x-prefixed) or decimal integer argument
fn parse_integer(text: &str) -> Result<u64, std::num::ParseIntError>
{
    match text.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    }
}
