//! chanpick — interactive channel selection for chat export pipelines.

use chanpick_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            chanpick_cli::ui::print_error(&format!("{err:#}"));
            std::process::exit(errors::exit_code(&err));
        }
    }
}
