//! Authenticated session that executes API calls end to end.
//!
//! # Design
//! A `Session` pairs an immutable `ClientConfig` with a `Transport`. Every
//! operation builds a request with `ApiClient`, hands it to the transport,
//! and parses the response. The session keeps no per-call state, so it can
//! be shared (e.g. behind an `Arc`) and called concurrently.
//!
//! Every operation takes an optional token that replaces the session token
//! for that one call.

use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Entity, EntityId};

#[derive(Debug, Clone)]
pub struct Session<T = UreqTransport> {
    config: ClientConfig,
    api: ApiClient,
    transport: T,
}

impl Session<UreqTransport> {
    /// Session over the blocking `ureq` transport, using the config timeout.
    pub fn new(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Session<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let api = ApiClient::from_config(&config);
        Self {
            config,
            api,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /api/<kind>/<id>`
    pub fn get<E: Entity>(&self, id: EntityId, token: Option<&str>) -> Result<E, ClientError> {
        let response = self.send(self.api.build_get::<E>(id, token))?;
        self.api.parse_entity(response)
    }

    /// `GET /api/<kind>`
    pub fn list<E: Entity>(&self, token: Option<&str>) -> Result<Vec<E>, ClientError> {
        let response = self.send(self.api.build_list::<E>(token))?;
        self.api.parse_list(response)
    }

    /// `POST /api/<kind>`. Returns the entity with its server-assigned id.
    pub fn create<E: Entity>(
        &self,
        payload: &E::Payload,
        token: Option<&str>,
    ) -> Result<E, ClientError> {
        let response = self.send(self.api.build_create::<E>(payload, token)?)?;
        self.api.parse_entity(response)
    }

    /// `PUT /api/<kind>/<id>`. The returned entity, not `payload`, is the
    /// persisted state.
    pub fn update<E: Entity>(
        &self,
        id: EntityId,
        payload: &E::Payload,
        token: Option<&str>,
    ) -> Result<E, ClientError> {
        let response = self.send(self.api.build_update::<E>(id, payload, token)?)?;
        self.api.parse_entity(response)
    }

    /// `DELETE /api/<kind>/<id>`
    pub fn delete<E: Entity>(&self, id: EntityId, token: Option<&str>) -> Result<(), ClientError> {
        let response = self.send(self.api.build_delete::<E>(id, token))?;
        self.api.parse_delete(response)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, %path, "sending request");

        let response = self.transport.execute(request).inspect_err(|e| {
            warn!(%method, %path, error = %e, "request failed");
        })?;

        match response.status {
            200 | 201 => debug!(%method, %path, status = response.status, "received response"),
            status => warn!(%method, %path, status, "unexpected status"),
        }
        Ok(response)
    }
}
