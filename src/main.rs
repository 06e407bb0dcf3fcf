use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;

use event_hotels_api::config::Config;
use event_hotels_api::{app_config, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config.database_url).await;

    // Run migrations
    log::info!("Running migrations...");
    db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    let pool_data = web::Data::new(pool);
    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(config_data.clone())
            .wrap(middleware::Logger::default())
            .configure(app_config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
