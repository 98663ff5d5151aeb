use std::{fmt::Display, fmt::Formatter};

use clap::{Parser, Subcommand};
use log::info;

use super::alphabet::Alphabet;

/// Verbosity of user information
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Compress, Decompress, Test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnaOpts {
    /// Symbol alphabet used to read the input (and write the output when decompressing)
    pub alphabet: Alphabet,
    /// Name of the file to read
    pub input: String,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Name of the file to write. None when only testing.
    pub output: Option<String>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl DnaOpts {
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::Bytes,
            input: String::new(),
            op_mode: Mode::Zip,
            output: None,
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for DnaOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Quaternary Huffman compression into DNA text",
    long_about = "
    Compresses any file into a string of nucleotides (A, T, C, G) using a four-way
    variant of Huffman coding. The output opens with a barcode holding the full symbol
    frequency table, so a compressed file can be decompressed on its own."
)]
pub struct Args {
    /// Sets verbosity. -v shows progress, -vv debugging detail, -vvv the code table
    #[clap(short = 'v', long = "verbose", parse(from_occurrences), global = true)]
    verbose: u64,

    /// Only report errors
    #[clap(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    /// Treat input as UTF-8 text and code whole characters instead of bytes
    #[clap(long = "utf8", global = true)]
    utf8: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress <INPUT> into nucleotide text at <OUTPUT>
    Compress { input: String, output: String },
    /// Decompress nucleotide text at <INPUT> into <OUTPUT>
    Decompress { input: String, output: String },
    /// Check that <INPUT> decompresses, without writing anything
    Test { input: String },
}

/// Turn parsed arguments into our internal structure.
impl From<Args> for DnaOpts {
    fn from(args: Args) -> Self {
        let mut opts = DnaOpts::new();
        match args.command {
            Command::Compress { input, output } => {
                opts.op_mode = Mode::Zip;
                opts.input = input;
                opts.output = Some(output);
            }
            Command::Decompress { input, output } => {
                opts.op_mode = Mode::Unzip;
                opts.input = input;
                opts.output = Some(output);
            }
            Command::Test { input } => {
                opts.op_mode = Mode::Test;
                opts.input = input;
            }
        }
        if args.utf8 {
            opts.alphabet = Alphabet::Utf8;
        }
        opts.verbose = if args.quiet {
            Verbosity::Errors
        } else {
            match args.verbose {
                0 => Verbosity::Warnings,
                1 => Verbosity::Info,
                2 => Verbosity::Debug,
                _ => Verbosity::Trace,
            }
        };
        opts
    }
}

/// Parse the command line, set the log level, and report what we are about to do.
pub fn dnaopts_init() -> DnaOpts {
    let opts = DnaOpts::from(Args::parse());
    set_log_level(opts.verbose);

    info!("---- dnazip Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Getting input from the file {}", opts.input);
    if let Some(output) = &opts.output {
        info!("Sending output to the file {}", output);
    }
    info!("Reading symbols as {}", opts.alphabet);
    info!("---- dnazip Initialization End ----\n");
    opts
}

/// Set the log level
pub fn set_log_level(verbose: Verbosity) {
    match verbose {
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };
}
