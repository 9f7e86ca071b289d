use std::net::SocketAddr;

pub mod adapters;
pub mod config;
pub mod ports;
pub mod types;

mod app;
mod assets;
mod reminders;
mod state;
mod store;
mod templates;

pub use app::app;

/// Two-phase startup: load the persisted state, run the one-shot reminder
/// sweep against it, then hand the settled state to the presentation layer.
pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let store = adapters::FsStore::new(&config.data_dir);
    let mut subscriptions = store::load_subscriptions(&store);
    reminders::maybe_run_sweep(&config, &store, &mut subscriptions).await;
    let theme = store::load_theme(&store);

    let router = app::app(config, store, subscriptions, theme);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, router).await.expect("server error");
}
