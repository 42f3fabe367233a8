use log::info;
use migration::{Migrator, MigratorTrait};
use server::{app, state::AppState, utils::shutdown::shutdown_signal};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://coursehub.db?mode=rwc".to_owned());
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

    let db = database::db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let app = app(AppState { db });

    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();
    info!("Running axum on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}
