use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use readstack_server::{
    app_state::AppState, config::Config, handlers, middleware::ActivityTracker,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(ActivityTracker)
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
