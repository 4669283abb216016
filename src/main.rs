use color_eyre::Result;

use holmes_admin::adapters::ReqwestHttpClient;
use holmes_admin::cli::{parse_args, run_cli_command};
use holmes_admin::cli_output::{icons, print_alert_box, print_step_line};
use holmes_admin::config::AdminConfig;
use holmes_admin::console::{Console, ConsoleOutput, LineSource};
use holmes_admin::logging::init_logging;
use holmes_admin::preview::{preview_addr, start_preview_server_on, PreviewHub};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            print_alert_box(&e.user_message());
            std::process::exit(2);
        }
    };
    // Version and help exit here.
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    let config = match AdminConfig::from_env().and_then(|c| c.with_overrides(&options)) {
        Ok(config) => config,
        Err(e) => {
            print_alert_box(&e.user_message());
            std::process::exit(2);
        }
    };

    let log_path = init_logging(&config.log_directory())?;
    tracing::info!(
        server = %config.server_url,
        locale = config.locale.as_deref().unwrap_or("en"),
        preview = config.preview,
        "starting holmes-admin"
    );

    // Single-threaded: the console awaits each action before reading on.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let hub = if config.preview {
            let hub = PreviewHub::new();
            match start_preview_server_on(preview_addr(config.preview_port), hub.clone()).await {
                Ok((_handle, addr)) => {
                    let url = format!("http://{}", addr);
                    print_step_line(icons::INFO, &format!("Preview at {}", url));
                    if config.open_browser {
                        if let Err(e) = webbrowser::open(&url) {
                            tracing::warn!("could not open browser: {}", e);
                        }
                    }
                    Some(hub)
                }
                Err(e) => {
                    tracing::warn!("preview server not started: {}", e);
                    print_step_line(icons::WARNING, &format!("Preview disabled: {}", e));
                    None
                }
            }
        } else {
            None
        };
        print_step_line(icons::INFO, &format!("Logging to {}", log_path.display()));

        let output = ConsoleOutput::stdout();
        let mut console = match Console::from_config(
            &config,
            ReqwestHttpClient::new(),
            hub,
            LineSource::stdin(),
            output.clone(),
        ) {
            Ok(console) => console,
            Err(e) => {
                tracing::error!(code = e.error_code(), "console setup failed: {}", e);
                Console::print_fatal(&output, &e);
                std::process::exit(1);
            }
        };

        console.run().await?;
        Ok::<(), color_eyre::Report>(())
    })
}
