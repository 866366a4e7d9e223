use std::sync::Arc;

use tokio::net::TcpListener;

use folio::{AppState, Config, Logger, PageStore, Templates, WikiError, router};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if Logger::init().is_err() {
        eprintln!("logger already initialized");
    }

    let config = Config::new();
    let state = AppState {
        store: PageStore::new(config.data_dir.clone()),
        templates: Arc::new(Templates::load(&config.template_dir)),
    };

    let app = router(state);

    let addr = config.socket_addr();
    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
