// Command-line host for the run-length encoder.
//
// Uses explicit subcommands and long-form options. Input comes from a
// positional text argument, a file, or stdin; output goes to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

use crate::rle::config::{CAPACITY_MULTIPLIER, EncoderConfig, MAX_RUN_LENGTH};
use crate::rle::encoder::{EncodeStats, RunLengthEncoder};

const BUF_SIZE: usize = 64 * 1024;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Run-length encoder for character sequences.
#[derive(Parser, Debug)]
#[command(
    name = "runlength",
    version,
    about = "Run-length encoder",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Force overwrite existing output files.
    #[arg(short = 'f', long, global = true)]
    force: bool,

    /// Quiet mode (suppress non-error output).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Output stats as JSON to stderr.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run-length encode text, a file, or stdin.
    Encode(EncodeArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Text to encode (default: read --input or stdin).
    #[arg(conflicts_with = "input")]
    text: Option<String>,

    /// Input file, read as UTF-8.
    #[arg(long, short = 'i', value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Write output to stdout.
    #[arg(short = 'c', long)]
    stdout: bool,

    /// Longest count emitted for a single pair.
    #[arg(long = "max-run-length", value_parser = clap::value_parser!(u32).range(1..), default_value_t = MAX_RUN_LENGTH)]
    max_run_length: u32,

    /// Check/compute only (do not write output).
    #[arg(long = "check-only")]
    no_output: bool,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Encode,
    Config,
}

#[derive(Debug)]
enum InputSource {
    Text(String),
    File(PathBuf),
    Stdin,
}

struct Options {
    command: Command,
    use_stdout: bool,
    force: bool,
    quiet: bool,
    verbose: u8,
    no_output: bool,
    max_run_length: u32,
    input: InputSource,
    output_file: Option<PathBuf>,
    json_output: bool,
}

fn resolve_options(cli: Cli) -> Options {
    let quiet = cli.quiet;
    let verbose = cli.verbose.min(2);
    let force = cli.force;
    let json_output = cli.json_output;

    match cli.command {
        Cmd::Encode(args) => {
            let input = match (args.text, args.input) {
                (Some(text), _) => InputSource::Text(text),
                (None, Some(path)) => InputSource::File(path),
                (None, None) => InputSource::Stdin,
            };
            Options {
                command: Command::Encode,
                use_stdout: args.stdout,
                force,
                quiet,
                verbose,
                no_output: args.no_output,
                max_run_length: args.max_run_length,
                input,
                output_file: args.output,
                json_output,
            }
        }
        Cmd::Config => Options {
            command: Command::Config,
            use_stdout: false,
            force,
            quiet,
            verbose,
            no_output: false,
            max_run_length: MAX_RUN_LENGTH,
            input: InputSource::Stdin,
            output_file: None,
            json_output,
        },
    }
}

#[cfg(any(test, feature = "fuzzing"))]
pub fn fuzz_try_parse_args(args: &[String]) {
    let argv: Vec<String> = std::iter::once("runlength".to_string())
        .chain(args.iter().cloned())
        .collect();
    if let Ok(cli) = Cli::try_parse_from(argv) {
        let opts = resolve_options(cli);
        let _ = build_encoder(&opts);
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("runlength version {version} (Rust)");

    let parallel = cfg!(feature = "parallel") as u8;
    let ptr_size = std::mem::size_of::<*const ()>();

    eprintln!("PARALLEL={parallel}");
    eprintln!("CAPACITY_MULTIPLIER={CAPACITY_MULTIPLIER}");
    eprintln!("MAX_RUN_LENGTH={MAX_RUN_LENGTH}");
    eprintln!("sizeof(usize)={ptr_size}");

    0
}

// ---------------------------------------------------------------------------
// Build the encoder from CLI options
// ---------------------------------------------------------------------------

fn build_encoder(opts: &Options) -> RunLengthEncoder {
    // clap enforces the lower bound; fall back to the default limit otherwise.
    let config = match NonZeroU32::new(opts.max_run_length) {
        Some(limit) => EncoderConfig::default().with_max_run_length(limit),
        None => EncoderConfig::default(),
    };
    RunLengthEncoder::new(config)
}

// ---------------------------------------------------------------------------
// Encode command
// ---------------------------------------------------------------------------

fn read_input(source: &InputSource) -> Result<String, String> {
    match source {
        InputSource::Text(text) => Ok(text.clone()),
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("input file: {}: {e}", path.display())),
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut text)
                .map_err(|e| format!("read error: {e}"))?;
            Ok(text)
        }
    }
}

fn open_output(opts: &Options) -> Result<Box<dyn Write>, String> {
    match (opts.use_stdout, &opts.output_file) {
        (true, _) | (_, None) => Ok(Box::new(BufWriter::with_capacity(
            BUF_SIZE,
            io::stdout().lock(),
        ))),
        (false, Some(path)) => {
            if path.exists() && !opts.force {
                return Err(format!(
                    "output file exists, use -f to overwrite: {}",
                    path.display()
                ));
            }
            File::create(path)
                .map(|f| Box::new(BufWriter::with_capacity(BUF_SIZE, f)) as Box<dyn Write>)
                .map_err(|e| format!("output file: {}: {e}", path.display()))
        }
    }
}

fn cmd_encode(opts: &Options) -> i32 {
    let text = match read_input(&opts.input) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("runlength: {msg}");
            return 1;
        }
    };

    let encoder = build_encoder(opts);
    let (encoded, stats) = match encoder.encode_str_with_stats(Some(text.as_str())) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("runlength: encode error: {e}");
            return 1;
        }
    };

    if stats.split_runs > 0 {
        log::info!(
            "{} run(s) exceeded {} and were split",
            stats.split_runs,
            opts.max_run_length
        );
    }

    if opts.no_output {
        if !opts.quiet {
            eprintln!(
                "runlength: input chars: {}, output size: {}",
                stats.input_chars, stats.output_bytes
            );
        }
    } else {
        let mut writer = match open_output(opts) {
            Ok(w) => w,
            Err(msg) => {
                eprintln!("runlength: {msg}");
                return 1;
            }
        };
        if let Err(e) = writer.write_all(encoded.as_bytes()) {
            eprintln!("runlength: write error: {e}");
            return 1;
        }
        if let Err(e) = writer.flush() {
            eprintln!("runlength: write flush error: {e}");
            return 1;
        }
    }

    if opts.verbose > 0 && !opts.quiet {
        eprintln!(
            "runlength: encoder: input chars: {}, runs: {}, split runs: {}, output size: {}",
            stats.input_chars, stats.runs, stats.split_runs, stats.output_bytes
        );
    }

    if opts.json_output {
        eprintln!("{}", stats_json(&stats, opts.max_run_length));
    }

    0
}

fn stats_json(stats: &EncodeStats, max_run_length: u32) -> String {
    let json = serde_json::json!({
        "command": "encode",
        "input_chars": stats.input_chars,
        "runs": stats.runs,
        "split_runs": stats.split_runs,
        "output_size": stats.output_bytes,
        "max_run_length": max_run_length,
    });
    // A `json!` value always serializes.
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = Cli::parse();
    let mut opts = resolve_options(cli);

    let default_filter = match (opts.quiet, opts.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Warn if -c overrides output filename.
    if opts.use_stdout {
        if let Some(path) = opts.output_file.take() {
            log::warn!("-c option overrides output filename: {}", path.display());
        }
    }

    let exit_code = match opts.command {
        Command::Encode => cmd_encode(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
