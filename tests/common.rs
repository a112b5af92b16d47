#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::{Body, Bytes},
    http::{self, Request},
    response::Response,
    Router,
};
use customers::{app, config::Config};
use http_body_util::BodyExt as _;
use serde_json::Value as JsonValue;

pub const JSON: &str = "application/json";
pub const JSON_PATCH: &str = "application/json-patch+json";

pub fn test_config() -> Config {
    Config {
        address: "127.0.0.1:0".into(),
        ..Config::default()
    }
}

/// Router over a store seeded with customers 1 and 2.
pub fn setup_app() -> Router {
    app(test_config())
}

pub fn empty_app() -> Router {
    app(Config {
        seed_data: false,
        ..test_config()
    })
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_body(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn read_body(response: Response) -> Result<Bytes> {
    let collected = response.into_body().collect().await?;
    Ok(collected.to_bytes())
}

pub async fn read_json(response: Response) -> Result<JsonValue> {
    let body = read_body(response).await?;
    Ok(serde_json::from_slice(&body)?)
}
