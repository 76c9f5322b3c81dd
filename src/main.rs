use clap::error::ErrorKind;
use clap::Parser;
use pwcrypt::cli::{commands, load_settings, output, Cli, Command};

fn main() {
    // Usage errors exit with 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            output::error(&e.to_string());
            std::process::exit(1);
        }
    };
    output::configure(&settings);
    pwcrypt::logging::init(cli.verbose, &settings.log_level, settings.color);

    let result = match cli.command {
        Command::Enc => commands::enc::execute(&cli.password, &cli.text),
        Command::Dec => commands::dec::execute(&cli.password, &cli.text),
    };

    if let Err(e) = result {
        tracing::debug!(kind = ?e.kind(), "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
