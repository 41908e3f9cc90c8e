//! The rate server: a single `/cotacao` route that fetches, stores and
//! re-exposes the current bid. Every other path answers 404.

use std::net::TcpListener;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, dev::Server, web};
use log::{error, info, warn};

use crate::{
    config::{RATE_PATH, ServerConfig},
    error::FetchError,
    fetcher::Fetcher,
    quote::RateReply,
    storage::Storage,
};

#[derive(Debug)]
pub struct AppState {
    pub fetcher: Fetcher,
    pub storage: Storage,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Fetcher::new(&config.upstream_url, config.fetch_timeout)?,
            storage: Storage::new(&config.database_path).with_insert_timeout(config.insert_timeout),
        })
    }
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(RATE_PATH).to(get_rate))
        .default_service(web::to(not_found));
}

pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .listen(listener)?
        .run();

    Ok(server)
}

async fn get_rate(state: web::Data<AppState>) -> HttpResponse {
    let record = match state.fetcher.fetch().await {
        Ok(record) => record,
        Err(err) => {
            error!("{err}");
            return HttpResponse::BadGateway().finish();
        }
    };
    info!("Dollar rate found: {record:?}");

    // Storage errors are logged only; the fetched record is served regardless.
    let record = match state.storage.save(&record).await {
        Ok(saved) => {
            info!("Dollar rate saved with id={:?}", saved.id);
            saved
        }
        Err(err) => {
            error!("{err}");
            record
        }
    };

    HttpResponse::Ok().json(RateReply::new(record.bid))
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    warn!("Path [{}] not found", req.path());
    HttpResponse::NotFound().finish()
}
