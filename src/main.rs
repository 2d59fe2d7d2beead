//! Interactive shell for the record editor session client.
//!
//! Wires configuration, logging and a line-based command loop around the
//! session controller. This is the presentation layer: alerts print to
//! stderr and the modified buffer is edited with `set`.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use record_session::api::ApiClient;
use record_session::config::Config;
use record_session::session::{
    AlertSink, NoMarkers, SessionController, SessionOptions,
};

/// Alert sink printing transient alerts to stderr.
struct StderrAlerts;

impl AlertSink for StderrAlerts {
    fn alert(&self, header: &str, message: &str) {
        eprintln!("[{}] {}", header, message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting record editor session");
    tracing::info!("Backend: {}", config.base_url);
    if let Some(alias) = &config.alias {
        tracing::info!("Connection alias: {}", alias);
    }

    let api = ApiClient::new(config.base_url.clone(), config.alias.clone());
    let options = SessionOptions {
        with_versioning: config.with_versioning,
        with_revision_history: config.with_revision_history,
    };
    let mut controller =
        SessionController::new(api, options, Box::new(NoMarkers), Box::new(StderrAlerts));

    if let Err(err) = controller.load_reference_data().await {
        tracing::warn!("Could not load categories/schema: {}", err);
    } else {
        println!("Categories: {}", controller.categories().join(", "));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let arg = parts.next();

        let result = match command {
            "find" => {
                if let Some(id) = arg {
                    controller.set_id(id);
                }
                if let Some(version) = parts.next() {
                    controller.select_version(version);
                }
                controller.lookup().await
            }
            "category" => {
                if let Some(category) = arg {
                    controller.set_category(category);
                }
                Ok(())
            }
            "set" => {
                // Everything after the command is the new modified buffer.
                let text = line.trim_start_matches("set").trim_start();
                controller.set_modified_text(text);
                Ok(())
            }
            "show" => {
                println!("--- original ---\n{}", controller.pair().original_text());
                println!("--- modified ---\n{}", controller.pair().modified_text());
                Ok(())
            }
            "versions" => {
                println!("{}", controller.registry().versions().join("\n"));
                Ok(())
            }
            "flags" => {
                println!("{:?}", controller.flags());
                Ok(())
            }
            "create" => controller.create().await,
            "update" => controller.update().await,
            "addversion" => controller.add_version().await,
            "delete" => controller.delete().await,
            "undo" | "redo" => controller.revise(command).await,
            "save" => controller.save_session().await.map(|handle| {
                println!("Session saved: {:?}", handle);
            }),
            "quit" | "exit" => break,
            other => {
                eprintln!("Unknown command: {}", other);
                Ok(())
            }
        };

        // Errors were already shown through the alert sink.
        if result.is_err() {
            tracing::debug!("Command {} failed", command);
        }
    }

    Ok(())
}
