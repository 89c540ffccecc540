use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_leaderboard_server::{
    app_state::AppState,
    config::Config,
    handlers,
    middleware::{cors, RequestIdMiddleware},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    log::debug!("Loaded configuration: {:?}", config);

    let state = AppState::new(config.clone())
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Server is running on {}:{}",
        config.web_server_host,
        config.web_server_port
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(r#"%a "%r" %s %b %T %{x-request-id}o"#))
            .wrap(cors(&config))
            .configure(|cfg| handlers::configure(cfg, &config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
