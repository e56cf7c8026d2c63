use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, Response};

use crate::core::config::AppConfig;
use crate::core::error::ApiError;
use crate::core::models::{Client, Project};

fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// Generic GET returning a decoded JSON body
pub async fn get_json<T: DeserializeOwned>(config: &AppConfig, path: &str) -> Result<T, ApiError> {
    let url = config.api_url(path);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_credentials(RequestCredentials::Include);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| ApiError::Request(js_error(e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Request(js_error(e)))?;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Request(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ApiError::Request(js_error(e)))?;

    if !response.ok() {
        web_sys::console::error_1(&format!("GET {} -> {}", url, response.status()).into());
        return Err(ApiError::Status(response.status()));
    }

    let body = response.json().map_err(|e| ApiError::Decode(js_error(e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ApiError::Decode(js_error(e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn load_projects(config: &AppConfig) -> Result<Vec<Project>, ApiError> {
    get_json(config, "projects").await
}

pub async fn load_clients(config: &AppConfig) -> Result<Vec<Client>, ApiError> {
    get_json(config, "clients").await
}
