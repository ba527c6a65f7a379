use crate::app::shell;
use crate::model::AppState;
use axum::response::Response as AxumResponse;
use axum::{
    body::Body,
    extract::State,
    http::{Request, Response, StatusCode, Uri},
    response::IntoResponse,
};
use tower::ServiceExt;
use tower_http::services::ServeDir;

/// Serves a compiled asset when one exists at `uri`, otherwise renders the app.
pub async fn file_and_error_handler(
    uri: Uri,
    State(state): State<AppState>,
    req: Request<Body>,
) -> AxumResponse {
    let options = state.leptos_options;

    match get_static_file(uri.clone(), &options.site_root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(move || shell(options.clone()));
            handler(req).await.into_response()
        }
        Err((status, message)) => {
            tracing::error!(%uri, "static file lookup failed: {}", message);
            (status, message).into_response()
        }
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    // This path is relative to the cargo root
    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(e) => match e {},
    }
}
