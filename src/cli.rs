// Idiomatic Rust CLI for LZP.
//
// Two subcommands — encode and decode — mirroring the shape of the
// teacher's own CLI (clap derive, `-f`/`-q`/`-v` global flags, explicit
// exit codes) but scoped down to this codec's much smaller surface.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use crate::encoder::EncodeOptions;
use crate::engine;

/// LZP byte-level binary delta/patch codec.
#[derive(Parser, Debug)]
#[command(
    name = "lzp",
    version,
    about = "LZP delta/patch encoder and decoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite an existing output file.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Produce a patch from one or more sources and a target file.
    Encode(EncodeArgs),
    /// Apply a patch against one or more sources to reconstruct a target.
    Decode(DecodeArgs),
}

#[derive(clap::Args, Debug)]
struct EncodeArgs {
    /// Source file(s) the patch is built against, in order.
    #[arg(short = 's', long = "source", required = true)]
    sources: Vec<PathBuf>,

    /// The target file to encode.
    target: PathBuf,

    /// Where to write the patch. Defaults to stdout.
    output: Option<PathBuf>,

    /// Omit the header (magic, source count, checksums).
    #[arg(long)]
    no_header: bool,

    /// Minimum match length the search will accept (floor is 2).
    #[arg(long, default_value_t = 2)]
    min_match: usize,
}

#[derive(clap::Args, Debug)]
struct DecodeArgs {
    /// Source file(s) the patch was built against, in order.
    #[arg(short = 's', long = "source", required = true)]
    sources: Vec<PathBuf>,

    /// The patch file to apply.
    patch: PathBuf,

    /// Where to write the reconstructed target. Defaults to stdout.
    output: Option<PathBuf>,

    /// The patch has no header (magic/source-count/checksums).
    #[arg(long)]
    no_header: bool,
}

pub fn run() -> ! {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose >= 2 {
        "trace"
    } else if cli.verbose == 1 {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match &cli.command {
        Cmd::Encode(args) => cmd_encode(args, cli.force),
        Cmd::Decode(args) => cmd_decode(args, cli.force),
    };
    process::exit(exit_code);
}

fn cmd_encode(args: &EncodeArgs, force: bool) -> i32 {
    let sources = match read_all(&args.sources) {
        Ok(data) => data,
        Err(code) => return code,
    };
    let target = match fs::read(&args.target) {
        Ok(data) => data,
        Err(e) => return fail(format!("reading {}: {e}", args.target.display())),
    };

    let source_refs: Vec<&[u8]> = sources.iter().map(Vec::as_slice).collect();
    let opts = EncodeOptions {
        header: !args.no_header,
        min_match: args.min_match,
    };
    let (patch, stats) = match engine::encode_with_options(&target, &source_refs, &opts) {
        Ok(result) => result,
        Err(e) => return fail(format!("encode failed: {e}")),
    };

    log::info!(
        "{} copy command(s) ({} bytes), {} literal byte(s), patch size {} bytes",
        stats.copy_commands,
        stats.copy_bytes,
        stats.literal_bytes,
        patch.len()
    );

    match write_output(args.output.as_deref(), &patch, force) {
        Ok(()) => 0,
        Err(code) => code,
    }
}

fn cmd_decode(args: &DecodeArgs, force: bool) -> i32 {
    let sources = match read_all(&args.sources) {
        Ok(data) => data,
        Err(code) => return code,
    };
    let patch = match fs::read(&args.patch) {
        Ok(data) => data,
        Err(e) => return fail(format!("reading {}: {e}", args.patch.display())),
    };

    let source_refs: Vec<&[u8]> = sources.iter().map(Vec::as_slice).collect();
    let target = match engine::decode(&patch, &source_refs, !args.no_header) {
        Ok(result) => result,
        Err(e) => return fail(format!("decode failed: {e}")),
    };

    match write_output(args.output.as_deref(), &target, force) {
        Ok(()) => 0,
        Err(code) => code,
    }
}

fn read_all(paths: &[PathBuf]) -> Result<Vec<Vec<u8>>, i32> {
    paths
        .iter()
        .map(|path| fs::read(path).map_err(|e| fail(format!("reading {}: {e}", path.display()))))
        .collect()
}

fn write_output(path: Option<&Path>, bytes: &[u8], force: bool) -> Result<(), i32> {
    match path {
        None => {
            io::stdout()
                .write_all(bytes)
                .map_err(|e| fail(format!("writing stdout: {e}")))?;
            Ok(())
        }
        Some(path) => {
            if path.exists() && !force {
                return Err(fail(format!(
                    "{} already exists (use -f to overwrite)",
                    path.display()
                )));
            }
            fs::write(path, bytes).map_err(|e| fail(format!("writing {}: {e}", path.display())))
        }
    }
}

fn fail(message: String) -> i32 {
    eprintln!("lzp: {message}");
    1
}
