use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use stackma::{
    config::{Config, MAX_DEPTH, MAX_STACK_SIZE},
    error::RunError,
    get_output,
    runner::run_file,
};
use tracing::Level;

/// stackma runs programs written in a small stack-based language and writes
/// the final stack, one value per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run, named `input-NNN.txt`.
    input: PathBuf,

    /// Directory that receives `output-NNN.txt`.
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Prints the final stack to standard output instead of writing a file.
    #[arg(short, long)]
    print: bool,

    /// Maximum nesting of lambda invocations and `EVAL`s.
    #[arg(long, default_value_t = MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of values on the stack.
    #[arg(long, default_value_t = MAX_STACK_SIZE)]
    max_stack_size: usize,

    /// Logs more detail to standard error; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let config = Config::default().with_max_depth(args.max_depth)
                                  .with_max_stack_size(args.max_stack_size);

    let result = if args.print {
        print_program(&args.input, &config)
    } else {
        run_file(&args.input, &args.output_dir, &config).map(drop)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn print_program(input: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(input).map_err(|source| RunError::Io { path: input.to_path_buf(),
                                                                           source })?;

    for line in get_output(&source, config)? {
        println!("{line}");
    }
    Ok(())
}
