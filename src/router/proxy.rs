use crate::model::{AppState, Error};
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use url::Url;

/// Hands `/activities` requests to the backend unchanged so the page can use same-origin urls.
pub async fn activities_proxy(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    match forward(&state, method.clone(), &uri, body).await {
        Ok(response) => {
            tracing::debug!(%method, %uri, status = %response.status(), "forwarded");
            response
        }
        Err(e) => {
            tracing::error!(%method, %uri, "activities backend unreachable: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "detail": String::from(e) })),
            )
                .into_response()
        }
    }
}

async fn forward(
    state: &AppState,
    method: Method,
    uri: &Uri,
    body: Bytes,
) -> Result<Response, Error> {
    let target = upstream_url(&state.upstream, uri)?;

    let upstream = state
        .reqwest_client
        .request(method, target)
        .body(body)
        .send()
        .await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}

fn upstream_url(upstream: &Url, uri: &Uri) -> Result<Url, Error> {
    let path = uri
        .path_and_query()
        .map(|path| path.as_str())
        .unwrap_or(uri.path());
    // relative join keeps a path prefix on the upstream url
    Ok(upstream.join(path.trim_start_matches('/'))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_encoded_path_and_query() {
        let upstream = Url::parse("http://127.0.0.1:8000").unwrap();
        let uri: Uri = "/activities/Chess%20Club/signup?email=a%40b.c".parse().unwrap();
        assert_eq!(
            upstream_url(&upstream, &uri).unwrap().as_str(),
            "http://127.0.0.1:8000/activities/Chess%20Club/signup?email=a%40b.c"
        );
    }

    #[test]
    fn keeps_upstream_prefix() {
        let upstream = Url::parse("http://backend.internal/api/").unwrap();
        let uri: Uri = "/activities".parse().unwrap();
        assert_eq!(
            upstream_url(&upstream, &uri).unwrap().as_str(),
            "http://backend.internal/api/activities"
        );
    }
}
