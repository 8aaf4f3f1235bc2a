use control_client::api::SimulationClient;
use control_client::config;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[tokio::main]
async fn main() {
    init_runtime();

    let base_url = config::simulation_server_url();
    let client = match SimulationClient::new(base_url.clone(), config::request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to initialize simulation client");
            std::process::exit(1);
        }
    };

    println!("Robot Simulation Control");
    println!("server: {base_url}");
    println!("press Enter to start a simulation, type 'quit' to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // EOF or a closed stdin ends the shell.
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        };

        match line.trim() {
            "quit" | "exit" => break,
            "" | "start" => {
                // Each activation is an independent request; overlapping
                // activations run concurrently with no coordination.
                let client = client.clone();
                tokio::spawn(async move {
                    match client.start_simulation().await {
                        Ok(response) => {
                            info!(
                                message = %response.message,
                                run_id = response.run_id.as_deref().unwrap_or("-"),
                                "simulation started"
                            );
                        }
                        Err(e) => error!(error = %e, "failed to start simulation"),
                    }
                });
            }
            other => println!("unknown command: {other}"),
        }
    }
}
