use std::{io::Write, path::PathBuf, process::ExitCode};

use castgen::{
    check_tree,
    emit::{Options, Target, generate},
    write_tree,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// castgen generates a checked numeric cast library: one function per pair of
/// primitive numeric types, a generic entry point, and boundary tests.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Name of the generated crate, used by the tests and doc examples.
    #[arg(long, global = true, default_value = "safecast")]
    crate_name: String,

    /// Module (and file) name of the fixed-width conversion functions.
    #[arg(long, global = true, default_value = "casts")]
    casts_module: String,

    /// Module (and file) name of the generic entry points.
    #[arg(long, global = true, default_value = "generics")]
    dispatch_module: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the fixed-width conversion functions.
    Casts,
    /// Prints the generic dispatch entry points.
    Generics,
    /// Prints the boundary tests.
    Tests,
    /// Prints the crate root wiring the generated modules together.
    Lib,
    /// Writes every generated file below a crate directory.
    Write {
        /// Root of the generated crate.
        #[arg(default_value = ".")]
        out_dir: PathBuf,
    },
    /// Fails if generated files below a crate directory are out of date.
    Check {
        /// Root of the generated crate.
        #[arg(default_value = ".")]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    // Generated source goes to stdout, so logs always go to stderr.
    if let Ok(filter) = EnvFilter::try_from_env("CASTGEN_LOG") {
        tracing_subscriber::fmt().with_env_filter(filter)
                                 .with_target(true)
                                 .with_writer(std::io::stderr)
                                 .init();
    }

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::new(&args.crate_name, &args.casts_module, &args.dispatch_module)?;

    let target = match args.command {
        Command::Casts => Target::Casts,
        Command::Generics => Target::Dispatch,
        Command::Tests => Target::Tests,
        Command::Lib => Target::Root,
        Command::Write { out_dir } => {
            for path in write_tree(&out_dir, &options)? {
                println!("{}", path.display());
            }
            return Ok(());
        },
        Command::Check { out_dir } => {
            check_tree(&out_dir, &options)?;
            return Ok(());
        },
    };

    tracing::debug!(?target, "generating");
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(generate(target, &options).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
