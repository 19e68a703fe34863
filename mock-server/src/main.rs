use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().compact().with_env_filter(env_filter).init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let username = std::env::var("FLIGHTAWARE_USERNAME").unwrap_or_else(|_| "demo".to_string());
    let api_key = std::env::var("FLIGHTAWARE_API_KEY").unwrap_or_else(|_| "demo".to_string());

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("mock FlightXML listening on {addr} (user {username})");
    mock_server::run(listener, &username, &api_key).await
}
