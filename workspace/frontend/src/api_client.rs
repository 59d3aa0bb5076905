use async_trait::async_trait;
use client::{ApiClient, ApiTransport, HttpReply, TransportError};
use gloo_net::http::{Request, Response};
use std::rc::Rc;

use crate::settings;

/// `fetch`-backed transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

async fn into_reply(response: Response) -> Result<HttpReply, TransportError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| {
        let error_msg = format!("Failed to read response: {}", e);
        log::error!("{} - {}", response.url(), error_msg);
        TransportError::new(error_msg)
    })?;
    Ok(HttpReply { status, body })
}

#[async_trait(?Send)]
impl ApiTransport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        log::trace!("GET {} - sending", url);
        let response = Request::get(url).send().await.map_err(|e| {
            log::error!("GET {} - Request failed: {}", url, e);
            TransportError::new(e.to_string())
        })?;
        into_reply(response).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        log::trace!("POST {} - sending {} bytes", url, body.len());
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| {
                let error_msg = format!("Failed to build request: {}", e);
                log::error!("POST {} - {}", url, error_msg);
                TransportError::new(error_msg)
            })?
            .send()
            .await
            .map_err(|e| {
                log::error!("POST {} - Request failed: {}", url, e);
                TransportError::new(e.to_string())
            })?;
        into_reply(response).await
    }
}

pub type Api = ApiClient<BrowserTransport>;

/// API client rooted at the base URL resolved at startup.
pub fn api() -> Rc<Api> {
    Rc::new(ApiClient::new(
        settings::get_settings().api_base_url(),
        BrowserTransport,
    ))
}
