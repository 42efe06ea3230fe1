mod cli;
mod run;

use tracing_subscriber::EnvFilter;

fn main() {
    let args = cli::parse();

    // Logs go to stderr; stdout carries only JSON.
    let log_directive = args.log_level.as_deref().unwrap_or("customizer=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "customizer=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("customizer v{} starting", env!("CARGO_PKG_VERSION"));

    match run::run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
