use bmp2array::convert::{self, ConvertError, EXIT_USAGE};
use bmp2array::metadata;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bmp2array")]
#[command(about = "Convert a 24-bit bitmap into an RGBA byte array literal")]
#[command(long_about = "\
Convert a 24-bit bitmap into an RGBA byte array literal

Given a base path, reads BASE.bmp and BASE.info and prints a C-style array
of the image's pixels with an alpha byte appended to each one.

Input layout:

  BASE.bmp    54-byte header, then width*height packed RGB triples
  BASE.info   one `key = value` per line, for example:

                transparency = true
                transparency_red = 155
                transparency_green = 155
                transparency_blue = 155

Pixels equal to the transparency color get alpha 0, all others 255.

Run 'bmp2array --gen-info' to print a documented .info file.")]
#[command(version)]
struct Cli {
    /// Path to the input files without extension (BASE.bmp, BASE.info)
    base: Option<PathBuf>,

    /// Write the array to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a documented sample .info file and exit
    #[arg(long, conflicts_with = "base")]
    gen_info: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return argument_error(err),
    };
    init_logging(cli.verbose);

    if cli.gen_info {
        print!("{}", metadata::stock_info_file());
        return ExitCode::SUCCESS;
    }

    let Some(base) = cli.base else {
        print_usage();
        return ExitCode::from(EXIT_USAGE);
    };

    match run(&base, cli.output.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(base: &Path, output: Option<&Path>) -> Result<(), ConvertError> {
    let paths = convert::resolve_inputs(base)?;
    let conversion = convert::convert_files(&paths)?;

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| ConvertError::Create {
                path: path.to_path_buf(),
                source,
            })?;
            conversion.write_to(&mut BufWriter::new(file))?;
            log::info!(
                "wrote {} bytes of pixel data to {}",
                conversion.pixels.len(),
                path.display()
            );
        }
        None => conversion.write_to(&mut BufWriter::new(io::stdout().lock()))?,
    }
    Ok(())
}

/// Help and version go to stdout with success; anything else is a usage error.
fn argument_error(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::from(EXIT_USAGE),
    }
}

fn print_usage() {
    let mut stderr = io::stderr();
    let _ = Cli::command().write_long_help(&mut stderr);
    let _ = writeln!(stderr);
}

/// Warn by default; `-v`/`-vv` raise it and `RUST_LOG` overrides both.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
