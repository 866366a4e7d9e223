use axum::{
    extract::{Path as AxumPath, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use crate::errors::WikiError;
use crate::types::{AppState, Page};
use crate::utils::{is_valid_title, last_modified_html};

/// Form payload for `POST /save/:title`
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub body: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/view/:title", get(handle_view))
        .route("/edit/:title", get(handle_edit))
        .route("/save/:title", post(handle_save))
        .with_state(state)
}

/// Handle root path requests
pub async fn handle_root() -> Response {
    redirect_found("/view/FrontPage")
}

/// Handle page view requests
pub async fn handle_view(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    let title = checked_title(&title)?;
    log::info!("View request for page '{}'", title);

    match state.store.load(title) {
        Ok(page) => {
            let path = state.store.page_path(title)?;
            let meta = last_modified_html(&path);
            let html = state.templates.render_view(&page, &meta)?;
            Ok(Html(html).into_response())
        }
        Err(WikiError::PageNotFound) => {
            log::info!("Page '{}' absent, redirecting to edit", title);
            Ok(redirect_found(&format!("/edit/{}", title)))
        }
        Err(e) => Err(e),
    }
}

/// Handle page edit requests
pub async fn handle_edit(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
) -> Result<Response, WikiError> {
    let title = checked_title(&title)?;
    log::info!("Edit request for page '{}'", title);

    let page = match state.store.load(title) {
        Ok(page) => page,
        // A brand-new page gets an empty form instead of an error.
        Err(WikiError::PageNotFound) => Page::empty(title),
        Err(e) => return Err(e),
    };

    let html = state.templates.render_edit(&page)?;
    Ok(Html(html).into_response())
}

/// Handle page save requests
pub async fn handle_save(
    State(state): State<AppState>,
    AxumPath(title): AxumPath<String>,
    Form(form): Form<SaveForm>,
) -> Result<Response, WikiError> {
    let title = checked_title(&title)?;
    log::info!("Save request for page '{}', {} bytes", title, form.body.len());

    let page = Page::new(title, form.body);
    state.store.save(&page)?;
    Ok(redirect_found(&format!("/view/{}", title)))
}

/// Validate the title segment before anything touches the filesystem.
///
/// Every handler runs its title through here, the same gate for all routes.
/// Invalid titles surface as a not-found response.
fn checked_title(title: &str) -> Result<&str, WikiError> {
    if !is_valid_title(title) {
        log::warn!("Rejected request with invalid title: {:?}", title);
        return Err(WikiError::InvalidTitle);
    }
    Ok(title)
}

/// A 302 Found redirect. axum's `Redirect::to` emits 303, and browsers are
/// expected to re-GET the target after a form post, so the classic 302 is
/// built by hand.
fn redirect_found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
