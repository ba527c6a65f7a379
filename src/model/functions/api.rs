use super::Endpoints;
use crate::model::types::*;
use gloo::net::http::{Request, Response};
use serde::Deserialize;

/// The three calls the page makes against the activities backend.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    async fn list(&self) -> Result<Activities, Error>;
    /// Returns the confirmation text the server sent.
    async fn sign_up(&self, activity: &str, email: &str) -> Result<String, Error>;
    async fn remove(&self, activity: &str, email: &str) -> Result<(), Error>;
}

/// `{message}` on success, `{detail}` on failure; the backend is not strict about which.
#[derive(Deserialize, Debug, Default)]
struct ServerReply {
    message: Option<String>,
    /// usually text, but validation failures send a list of objects
    detail: Option<serde_json::Value>,
}

impl ServerReply {
    fn detail_text(&self) -> Option<String> {
        match &self.detail {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// [`ActivitiesApi`] over the browser's fetch.
#[derive(Debug, Clone)]
pub struct HttpApi {
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    /// Talks to the origin the page was served from.
    pub fn from_window() -> Result<Self, Error> {
        let origin = super::page_origin()?;
        Ok(Self::new(Endpoints::new(&origin)?))
    }
}

impl ActivitiesApi for HttpApi {
    async fn list(&self) -> Result<Activities, Error> {
        let url = self.endpoints.activities()?;
        let response = Request::get(url.as_str()).send().await?;
        Ok(response.json::<Activities>().await?)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<String, Error> {
        let url = self.endpoints.signup(activity, email)?;
        let response = Request::post(url.as_str()).send().await?;
        let reply = response.json::<ServerReply>().await?;

        if response.ok() {
            Ok(reply.message.unwrap_or_default())
        } else {
            Err(Error::Status {
                status: response.status(),
                detail: reply.detail_text(),
            })
        }
    }

    async fn remove(&self, activity: &str, email: &str) -> Result<(), Error> {
        let url = self.endpoints.participant(activity, email)?;
        let response = Request::delete(url.as_str()).send().await?;

        if response.ok() {
            return Ok(());
        }
        let reply = lenient_reply(&response).await;
        Err(Error::Status {
            status: response.status(),
            detail: reply.detail_text().or(reply.message),
        })
    }
}

/// Error bodies of a removal are best effort, an unreadable one just carries no detail.
async fn lenient_reply(response: &Response) -> ServerReply {
    response.json::<ServerReply>().await.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: &str) -> ServerReply {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn text_detail_is_used_as_is() {
        let reply = reply(r#"{"detail": "Student already signed up"}"#);
        assert_eq!(reply.detail_text().as_deref(), Some("Student already signed up"));
    }

    #[test]
    fn validation_list_still_decodes() {
        let reply = reply(r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#);
        assert_eq!(
            reply.detail_text().as_deref(),
            Some(r#"[{"loc":["query","email"],"msg":"field required"}]"#)
        );
    }

    #[test]
    fn null_or_missing_detail_is_none() {
        assert_eq!(reply(r#"{"detail": null}"#).detail_text(), None);
        assert_eq!(reply(r#"{"message": "Signed up"}"#).detail_text(), None);
    }
}
