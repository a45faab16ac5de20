//! Command line front end for `pngstash`.
//!
//! ```text
//! pngstash embed --png in.png --to out.png --message "hi there"
//! pngstash embed --png in.png --to out.png --file secret.bin
//! pngstash extract --png out.png --to secret.bin
//! pngstash extract --png out.png --dump
//! pngstash list --png out.png
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `info`).

use std::{
  fs::File,
  io::{BufReader, BufWriter, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pngstash::png::{DecodeOptions, ExtractStrategy, Png};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pngstash", about = "Hide data inside a PNG as an ancillary chunk", version)]
struct Cli {
  /// Check every chunk's CRC while decoding
  #[arg(long, global = true, env = "PNGSTASH_STRICT")]
  strict: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Store a message or a file's bytes in a copy of a PNG
  Embed {
    /// PNG to read
    #[arg(long)]
    png: PathBuf,
    /// Where to write the new PNG
    #[arg(long)]
    to: PathBuf,
    #[command(flatten)]
    source: Source,
  },
  /// Get stored data back out of a PNG
  Extract {
    /// PNG to read
    #[arg(long)]
    png: PathBuf,
    /// File to write the data to
    #[arg(long, required_unless_present = "dump", conflicts_with = "dump")]
    to: Option<PathBuf>,
    /// Print the data to stdout
    #[arg(long)]
    dump: bool,
    /// How to find the payload chunk
    #[arg(long, value_enum, default_value_t = Strategy::IndexThenScan)]
    strategy: Strategy,
  },
  /// Print every chunk of a PNG
  List {
    /// PNG to read
    #[arg(long)]
    png: PathBuf,
  },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct Source {
  /// Text to store
  #[arg(long)]
  message: Option<String>,
  /// File whose bytes get stored
  #[arg(long)]
  file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
  Index,
  Scan,
  IndexThenScan,
}
impl From<Strategy> for ExtractStrategy {
  fn from(s: Strategy) -> Self {
    match s {
      Strategy::Index => ExtractStrategy::Index,
      Strategy::Scan => ExtractStrategy::Scan,
      Strategy::IndexThenScan => ExtractStrategy::IndexThenScan,
    }
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let opts = DecodeOptions { verify_crc: cli.strict };

  match cli.command {
    Command::Embed { png, to, source } => {
      let payload = match source.message {
        Some(message) => message.into_bytes(),
        None => {
          let file = source.file.context("one of --message or --file is needed")?;
          std::fs::read(&file).with_context(|| format!("reading {}", file.display()))?
        }
      };
      let mut image = read_png(&png, opts)?;
      image.embed(payload)?;
      write_png(&image, &to)?;
      tracing::info!("[+] {} written", to.display());
    }
    Command::Extract { png, to, dump, strategy } => {
      let image = read_png(&png, opts)?;
      let data = image.extract_with(strategy.into())?;
      match to {
        Some(to) => {
          std::fs::write(&to, data).with_context(|| format!("writing {}", to.display()))?;
          tracing::info!("[+] {} written", to.display());
        }
        None if dump => println!("DATA:\n{}", String::from_utf8_lossy(data)),
        None => {}
      }
    }
    Command::List { png } => {
      let image = read_png(&png, opts)?;
      for (n, chunk) in image.chunks().iter().enumerate() {
        println!(
          "{n}: {} length={} crc={:#010X} {}",
          chunk.chunk_ty(),
          chunk.length(),
          chunk.declared_crc(),
          if chunk.is_crc_valid() { "ok" } else { "BAD" }
        );
      }
    }
  }
  Ok(())
}

fn read_png(path: &Path, opts: DecodeOptions) -> Result<Png> {
  let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
  let png = Png::decode_with(&mut BufReader::new(file), opts)
    .with_context(|| format!("decoding {}", path.display()))?;
  tracing::debug!(chunks = png.chunks().len(), "read {}", path.display());
  Ok(png)
}

fn write_png(png: &Png, path: &Path) -> Result<()> {
  let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
  let mut out = BufWriter::new(file);
  png.encode_to(&mut out)?;
  out.flush()?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use clap::{error::ErrorKind, CommandFactory};

  use super::*;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_extract_to_and_dump_conflict() {
    let err = Cli::try_parse_from(["pngstash", "extract", "--png", "a.png", "--to", "b", "--dump"])
      .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

    let cli = Cli::try_parse_from(["pngstash", "extract", "--png", "a.png", "--dump"]).unwrap();
    assert!(matches!(cli.command, Command::Extract { to: None, dump: true, .. }));

    let cli = Cli::try_parse_from(["pngstash", "extract", "--png", "a.png", "--to", "b"]).unwrap();
    assert!(matches!(cli.command, Command::Extract { to: Some(_), dump: false, .. }));
  }

  #[test]
  fn test_extract_needs_a_destination() {
    let err = Cli::try_parse_from(["pngstash", "extract", "--png", "a.png"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
  }

  #[test]
  fn test_embed_needs_exactly_one_source() {
    let base = ["pngstash", "embed", "--png", "a.png", "--to", "b.png"];
    assert!(Cli::try_parse_from(base).is_err());
    let both = [&base[..], &["--message", "hi", "--file", "c"][..]].concat();
    assert_eq!(Cli::try_parse_from(both).unwrap_err().kind(), ErrorKind::ArgumentConflict);
    let one = [&base[..], &["--message", "hi"][..]].concat();
    assert!(Cli::try_parse_from(one).is_ok());
  }
}
