use headcount::{config::Config, routes, store};

use tracing::{event, Level};
use tracing_subscriber::fmt::writer::MakeWriterExt;

#[tokio::main]
async fn main() {
    // establish logging
    let logfile = tracing_appender::rolling::hourly("./logs", "headcount.log");

    let stdout = std::io::stdout.with_max_level(Level::INFO);
    tracing_subscriber::fmt()
        .pretty()
        .with_writer(stdout.and(logfile))
        .init();

    event!(Level::INFO, "Hello! Opening the doors.");

    // get config
    let config = Config::initialize();

    // open the occupancy database
    let pool = match store::connect(&config.database_file).await {
        Ok(pool) => {
            event!(Level::INFO, "Found occupancy database");
            pool
        }
        Err(e) => {
            event!(Level::ERROR, "Occupancy database unavailable | {}", e);
            panic!("Occupancy database unavailable. Terminating server");
        }
    };

    // establish routes
    let router = routes::router(config.clone(), pool);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .expect("Bad listener.");

    event!(Level::INFO, "Server listening on {}", config.bind_address);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Bad server.");
}
