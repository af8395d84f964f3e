mod cli;
mod logging;
mod repl;
mod setup;
mod widget;

use std::process::ExitCode;
use std::sync::Arc;

use widget::ChatWidget;

/// Load environment variables from a .env file (KEY=VALUE lines).
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/athena-app/
        manifest_dir.join("..").join("..").join(".env"),
        // Current directory
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

async fn run(args: cli::Args) -> athena_common::Result<()> {
    // Start at the CLI level (or info) so config loading is logged too.
    let logs = logging::init(args.log_level.as_deref().unwrap_or("info"));

    tracing::info!("Athena v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match athena_config::load_config(args.config.as_deref()) {
        Ok(config) => {
            tracing::info!("Config loaded (model: {})", config.provider.model);
            config
        }
        // An explicitly requested file must load.
        Err(e) if args.config.is_some() => return Err(e.into()),
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            athena_config::AthenaConfig::default()
        }
    };

    if args.log_level.is_none() {
        logs.set_directive(config.logging.level.as_directive());
    }

    let config = setup::apply_overrides(config, args.model)?;

    if args.print_config {
        println!("{}", athena_config::config_to_json(&config));
        return Ok(());
    }

    let relay = Arc::new(setup::build_relay(&config));
    let widget = ChatWidget::new(relay, config.persona.greeting.clone());
    widget.open().await;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&widget, &config.persona, stdin, tokio::io::stdout()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();

    let args = cli::parse();

    match run(args).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("athena: {e}");
            ExitCode::FAILURE
        }
    }
}
