mod cli;

use clap::Parser;

use recurrence_analyzer::http::router;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = cli::Args::parse();

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            log::error!("failed to bind to {addr}: {err}");
            std::process::exit(1);
        }
    };

    log::info!("listening on {addr}");
    axum::serve(listener, router()).await.expect("server loop exited unexpectedly");
}
