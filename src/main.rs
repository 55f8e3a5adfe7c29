use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use std::io;
use travel_booking_api::{configure, cors, Database, Settings};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = Settings::from_env();
    env_logger::init_from_env(Env::default().default_filter_or("debug"));

    log::info!("Using database {}", settings.database_url);
    let db = Database::new(&settings.database_url).map_err(io::Error::other)?;

    db.initialize().await.map_err(io::Error::other)?;

    let bind_addr = settings.bind_addr();
    log::info!("Starting server at http://{}", bind_addr);

    let db_data = web::Data::new(db);

    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
