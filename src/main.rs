//! markdown2html CLI - convert a Markdown file to an HTML file

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

use markdown2html::Error;

#[derive(Parser)]
#[command(name = "markdown2html")]
#[command(version, about = "Convert a Markdown file to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    markdown2html README.md README.html")]
struct Cli {
    /// Markdown file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// HTML file to write (created or truncated)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Extra arguments are ignored
    #[arg(hide = true)]
    rest: Vec<OsString>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            debug!("argument error: {e}");
            return report(&Error::Usage);
        }
    };

    match markdown2html::convert_file(&cli.input, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e),
    }
}

fn report(err: &Error) -> ExitCode {
    match err {
        Error::Io(e) => {
            debug!("{e}");
            eprintln!("Failed to read or write files.");
        }
        other => eprintln!("{other}"),
    }
    ExitCode::FAILURE
}
