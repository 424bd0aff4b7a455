//! Stateless HTTP request builder and response parser for the fitness API.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and the session token and carries no
//! mutable state between calls. Each CRUD operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Both are generic over [`Entity`], so the
//! exercise and strategy endpoints share one code path.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Entity, EntityId};

/// Header carrying the API token on every request.
pub const API_KEY_HEADER: &str = "api_key";

/// Synchronous, stateless client for the fitness API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: String,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url(), config.token())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list<E: Entity>(&self, token: Option<&str>) -> HttpRequest {
        self.request(HttpMethod::Get, self.collection_url::<E>(), token, None)
    }

    pub fn build_get<E: Entity>(&self, id: EntityId, token: Option<&str>) -> HttpRequest {
        self.request(HttpMethod::Get, self.item_url::<E>(id), token, None)
    }

    pub fn build_create<E: Entity>(
        &self,
        payload: &E::Payload,
        token: Option<&str>,
    ) -> Result<HttpRequest, ClientError> {
        let body = encode(payload)?;
        Ok(self.request(HttpMethod::Post, self.collection_url::<E>(), token, Some(body)))
    }

    pub fn build_update<E: Entity>(
        &self,
        id: EntityId,
        payload: &E::Payload,
        token: Option<&str>,
    ) -> Result<HttpRequest, ClientError> {
        let body = encode(payload)?;
        Ok(self.request(HttpMethod::Put, self.item_url::<E>(id), token, Some(body)))
    }

    pub fn build_delete<E: Entity>(&self, id: EntityId, token: Option<&str>) -> HttpRequest {
        self.request(HttpMethod::Delete, self.item_url::<E>(id), token, None)
    }

    /// A `null` body is treated as an empty collection.
    pub fn parse_list<E: Entity>(&self, response: HttpResponse) -> Result<Vec<E>, ClientError> {
        check_status(&response)?;
        let items: Option<Vec<E>> = decode(&response.body)?;
        Ok(items.unwrap_or_default())
    }

    /// Parse a single entity. Used for get, create, and update responses.
    pub fn parse_entity<E: Entity>(&self, response: HttpResponse) -> Result<E, ClientError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response)
    }

    fn collection_url<E: Entity>(&self) -> String {
        format!("{}/api/{}", self.base_url, E::COLLECTION)
    }

    fn item_url<E: Entity>(&self, id: EntityId) -> String {
        format!("{}/api/{}/{id}", self.base_url, E::COLLECTION)
    }

    fn request(
        &self,
        method: HttpMethod,
        path: String,
        token: Option<&str>,
        body: Option<String>,
    ) -> HttpRequest {
        let token = token.unwrap_or(&self.token);
        let mut headers = vec![(API_KEY_HEADER.to_string(), token.to_string())];
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method,
            path,
            headers,
            body,
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Only 200 and 201 count as success; everything else keeps the raw body.
fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    match response.status {
        200 | 201 => Ok(()),
        status => Err(ClientError::Api {
            status,
            body: response.body.clone(),
        }),
    }
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<String, ClientError> {
    serde_json::to_string(payload).map_err(|e| ClientError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}
