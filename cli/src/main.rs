use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

mod logging;
mod skills;

#[derive(Parser, Debug)]
#[command(name = "init_skill")]
#[command(about = "Create a new skill from the standard template", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(
        value_name = "SKILL_NAME",
        value_parser = NonEmptyStringValueParser::new(),
        allow_hyphen_values = true
    )]
    skill_name: String,

    #[arg(long = "path", value_name = "PATH", allow_hyphen_values = true)]
    path: PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging("warn") {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    ExitCode::from(run(std::env::args_os()))
}

/// Runs one invocation and returns the process exit status.
fn run<I, T>(args: I) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "Rejected command line");
            skills::print_usage();
            return 1;
        }
    };

    skills::print_start(&cli.skill_name, &cli.path);

    match skill_init_core::init_skill(&cli.skill_name, &cli.path) {
        Ok(report) => {
            skills::print_report(&report);
            0
        }
        Err(e) => {
            skills::print_error(&e);
            1
        }
    }
}
