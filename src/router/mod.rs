pub mod fileserv;
pub use fileserv::*;

pub mod proxy;
pub use proxy::*;

use crate::app::shell;
use crate::model::AppState;
use axum::{Router, routing::any};
use leptos_axum::{AxumRouteListing, LeptosRoutes};
use tower_http::trace::TraceLayer;

pub fn new(leptos_routes: Vec<AxumRouteListing>, app_state: AppState) -> Router {
    let options = app_state.leptos_options.clone();
    Router::new()
        .leptos_routes(&app_state, leptos_routes, move || shell(options.clone()))
        .route("/activities", any(activities_proxy))
        .route("/activities/*rest", any(activities_proxy))
        .fallback(file_and_error_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
