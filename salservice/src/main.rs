use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, web::Data, App, HttpServer};
use salservice::{
    api::{
        api::{
            api_info, health_check, home, internal_error_handlers, json_error_config, not_found,
            sal_service, swagger_spec, swagger_ui,
        },
        state::State,
    },
    Env,
};
use server_common::logger::init_logger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_logger();

    dotenvy::dotenv().ok();

    let env: Env = envy::from_env().map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to parse environment variables: {}", e),
        )
    })?;
    let state = State::new(&env).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to initialize query service: {}", e),
        )
    })?;
    let state = Data::new(state);
    let port = env.port;
    HttpServer::new(move || {
        let cors = Cors::permissive();
        App::new()
            .wrap(cors)
            .wrap(Logger::new("Request: %r | Status: %s | Duration: %Ts"))
            .wrap(internal_error_handlers())
            .app_data(json_error_config())
            .app_data(state.clone())
            .service(home)
            .service(api_info)
            .service(health_check)
            .service(sal_service)
            .service(swagger_spec)
            .service(swagger_ui)
            .default_service(web::route().to(not_found))
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}
