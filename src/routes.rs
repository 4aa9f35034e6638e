use crate::{
    config::Config,
    occupancy::{OccupancyStatus, OccupancyUpdate},
    store,
};
use axum::{
    debug_handler,
    http::{header::HeaderMap, Method, StatusCode},
    routing::{get, put},
    Extension, Json, Router,
};
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tracing::{event, Level};

pub fn router(config: Config, pool: SqlitePool) -> Router {
    Router::new()
        .route("/", get(|| async { "Counting heads at the door" }))
        .route("/get_occupancy", get(get_occupancy))
        .route("/update_occupancy", put(update_occupancy))
        .layer(Extension(config))
        .layer(Extension(pool))
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::PUT])
                .allow_origin(Any),
        )
}

#[debug_handler]
pub async fn get_occupancy(
    Extension(config): Extension<Config>,
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<OccupancyStatus>, StatusCode> {
    event!(Level::INFO, "GET | /get_occupancy");

    match store::count(&pool).await {
        Ok(occupancy) => Ok(Json(OccupancyStatus {
            occupancy,
            max_occupancy: config.max_occupancy,
        })),
        Err(e) => {
            event!(Level::ERROR, "Couldn't read occupancy count | {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[debug_handler]
pub async fn update_occupancy(
    Extension(config): Extension<Config>,
    Extension(pool): Extension<SqlitePool>,
    headers: HeaderMap,
    Json(update): Json<OccupancyUpdate>,
) -> Result<Json<OccupancyStatus>, StatusCode> {
    event!(Level::INFO, "PUT | /update_occupancy");

    let access_pass = match headers.get("x-access-key") {
        Some(access_pass) => access_pass,
        None => {
            event!(Level::WARN, "No access key provided");
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    if *config.access_key == *access_pass {
        if let Err(e) = store::set_count(&pool, update.occupancy).await {
            event!(Level::ERROR, "Couldn't write occupancy count | {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }

        let status = OccupancyStatus {
            occupancy: update.occupancy,
            max_occupancy: config.max_occupancy,
        };

        if status.at_capacity() {
            event!(
                Level::WARN,
                "Maximum occupancy reached | {} of {}",
                status.occupancy,
                status.max_occupancy
            );
        }

        Ok(Json(status))
    } else {
        event!(Level::WARN, "Unauthorized access attempt");
        Err(StatusCode::UNAUTHORIZED)
    }
}
