use clap::Parser;

use showcase::cli::Cli;
use showcase::logging::init_tracing;
use showcase::ui::runtime::run;

fn main() {
    let cli = Cli::parse();
    if let Some(path) = init_tracing(cli.log_file.as_deref()) {
        tracing::info!(path = %path.display(), "Logging to file");
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(config) {
        tracing::error!(error = %err, "Session failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
