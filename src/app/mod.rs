pub mod state;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Uri};
use color_eyre::Report;
use concat_string::concat_string;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::config::{self, Config};
use crate::{Error, constant, route};

const X_REQUEST_ID: &str = "x-request-id";

pub fn build(config: &Config) -> Router {
    router(state::App::new(config))
}

pub fn router(state: state::App) -> Router {
    Router::new()
        .merge(route::songs::router())
        .merge(route::system::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(X_REQUEST_ID)
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or_default();
                    tracing::info_span!(
                        "request", method = %request.method(), uri = %request.uri(), request_id
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

async fn route_not_found(uri: Uri) -> Error {
    Error::RouteNotFound(uri.path().to_owned())
}

async fn method_not_allowed(method: Method) -> Error {
    Error::MethodNotAllowed(method)
}

pub fn init_tracing(log: &config::Log) -> Result<(), Report> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| concat_string!(constant::SERVER_NAME, "=info,tower_http=info").into());
    let layer = match (log.format, log.time) {
        (config::log::Format::Plain, true) => fmt::layer().boxed(),
        (config::log::Format::Plain, false) => fmt::layer().without_time().boxed(),
        (config::log::Format::Json, true) => fmt::layer().json().boxed(),
        (config::log::Format::Json, false) => fmt::layer().json().without_time().boxed(),
    };

    tracing_subscriber::registry().with(layer).with(ErrorLayer::default()).with(filter).try_init()?;
    Ok(())
}
