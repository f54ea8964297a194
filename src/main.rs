use axum::serve::ListenerExt;
use songbook::{build, config, constant, init_tracing, migration};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = config::Config::default();
    init_tracing(&config.log).unwrap();
    tracing::info!(server_version =% constant::SERVER_VERSION);
    tracing::info!("{config:#?}");
    migration::run(&config.database.url).await.unwrap();

    let listener = tokio::net::TcpListener::bind(config.server.to_socket_addr()).await.unwrap();
    tracing::info!(listening_on =% listener.local_addr().unwrap());
    let listener = listener.tap_io(|tcp_stream| {
        if let Err(err) = tcp_stream.set_nodelay(true) {
            tracing::trace!("failed to set TCP_NODELAY on incoming connection: {err:#}");
        }
    });
    axum::serve(listener, build(&config)).await.unwrap();
}
