use actix_web::{dev::Server, middleware::from_fn, web, App, HttpServer};
use clap::Parser;
use std::net::TcpListener;

mod config;
mod cors;
mod error;
mod routes;
mod store;

use config::*;
use cors::cors;
use error::ApiError;
use store::*;

/// Builds the server over an already bound listener.
pub fn run(listener: TcpListener, store: web::Data<TodoStore>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(from_fn(cors))
            .configure(routes::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);

    let store = web::Data::new(TodoStore::new());

    let listener = match TcpListener::bind((args.host.as_str(), args.port)) {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(host = %args.host, port = args.port, error = %e, "failed to bind");
            return Err(e);
        }
    };

    tracing::info!("Server starting on {}:{}", args.host, args.port);
    let server = run(listener, store)?;

    if let Err(e) = server.await {
        tracing::error!(error = %e, "server stopped");
        return Err(e);
    }
    Ok(())
}
