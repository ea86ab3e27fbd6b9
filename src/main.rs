use anyhow::bail;
use skip_trace::app;
use skip_trace::config::logging::init_logging;
use skip_trace::config::settings::Settings;
use std::path::PathBuf;

fn parse_args() -> anyhow::Result<Option<PathBuf>> {
    let args: Vec<String> = std::env::args().collect();

    let mut settings_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--settings" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--settings requires a path");
                };
                settings_path = Some(PathBuf::from(path));
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--settings <path>]", args[0]);
                eprintln!("Example: {} --settings config/settings.json", args[0]);
                std::process::exit(0);
            }
            other => {
                bail!("unrecognized argument: {}", other);
            }
        }
    }

    Ok(settings_path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings_path = Settings::locate(parse_args()?);

    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            init_logging("INFO");
            tracing::error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&settings.log_level);

    match app::run(&settings).await {
        Ok(summary) => {
            tracing::info!(
                "Run finished: {} of {} queries resolved, results in {}",
                summary.succeeded,
                summary.total(),
                summary.output_file.display()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Run aborted: {}", e);
            std::process::exit(1);
        }
    }
}
