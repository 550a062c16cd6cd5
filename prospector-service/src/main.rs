use actix_web::{App, HttpServer, web};
use prospector_service::render::Pages;
use prospector_service::{middleware, routers};
use std::net::SocketAddr;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt().init();
    dotenvy::dotenv().ok();

    let port: u16 = envmnt::get_or("PORT", "5000").parse().unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let pages = web::Data::new(Pages::new());

    println!("Starting research server on {addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(pages.clone())
            .wrap(middleware::logger::RequestLogger)
            .service(routers::pages::index)
            .service(routers::pages::research)
            .service(routers::download::handle)
            .service(routers::health::handle)
    })
    .bind(addr)?
    .run()
    .await
}
