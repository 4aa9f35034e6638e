use headcount::{config::Config, panel::ConsolePanel, poll};

use tracing::{event, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() {
    // establish logging
    let stdout = std::io::stdout.with_max_level(Level::INFO);
    tracing_subscriber::fmt().pretty().with_writer(stdout).init();

    event!(Level::INFO, "Watching the door");

    // get config
    let config = Config::initialize();

    let client = reqwest::Client::new();
    let mut panel = ConsolePanel::new();

    // polls for the lifetime of the process
    poll::run(&config, &client, &mut panel).await;
}
