#[cfg(feature = "cli")]
use {
    crate::cli::args::Cli,
    crate::cli::command::build_mips::{build_mips, effective_prefs},
    crate::config::prefs::{load_prefs, save_prefs},
    clap::{Parser, error::ErrorKind as ClapErrorKind},
};
use crate::error::error::TexError;
#[cfg(not(feature = "cli"))]
use crate::error::kind::ErrorKind;

#[cfg(feature = "cli")]
fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    // a second init (tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Command line entry point.
/// - Help/Version → print and return Ok(())
/// - Other parse errors → print and exit with clap's code (usually 2)
#[cfg(feature = "cli")]
pub fn run() -> Result<(), TexError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => {
                let _ = e.print();
                std::process::exit(e.exit_code());
            }
        },
    };

    init_logger(cli.verbose);

    let prefs = load_prefs();
    if cli.save_prefs {
        save_prefs(&effective_prefs(&cli, &prefs))?;
    }

    build_mips(&cli, &prefs)?;
    Ok(())
}

#[cfg(not(feature = "cli"))]
pub fn run() -> Result<(), TexError> {
    Err(TexError::new(ErrorKind::Cli).with_arg("features", "cli"))
}
