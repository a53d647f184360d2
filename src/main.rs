use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;

use taskdeck::auth::{AuthService, TokenCodec};
use taskdeck::config::Config;
use taskdeck::routes;
use taskdeck::store::{PgTaskStore, PgUserStore, TaskStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    // Config is read once here and injected below; a missing or invalid
    // required setting aborts before anything binds.
    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    let users: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool.clone()));
    let tasks: Arc<dyn TaskStore> = Arc::new(PgTaskStore::new(pool));

    let tokens = TokenCodec::new(&config);
    let auth = AuthService::new(users, tokens.clone());
    let task_store = web::Data::from(tasks);

    log::info!("Starting taskdeck server at {}", config.server_url());

    let bind_addr = (config.server_host.clone(), config.server_port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(auth.clone()))
            .app_data(web::Data::new(tokens.clone()))
            .app_data(task_store.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(web::scope("/api").configure(routes::config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
