//! HTTP client for the record store backend.
//!
//! One method per backend endpoint, following the frontend contract. All
//! bodies are JSON; non-2xx responses surface as [`AppError::Http`] and are
//! never retried.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    is_latest, AliasRequest, CheckExistsRequest, DeleteRequest, ExistsResponse, FindOutcome,
    FindRequest, InsertRequest, KeysRequest, Record, RevisionStatus, SessionHandle,
    StatusResponse, UpdateRequest, VersionEntry, VersionsRequest,
};

/// Client for all backend endpoints. The configured alias identifies the
/// saved connection this session runs against and is attached to every
/// aliased request body.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    alias: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, alias: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            alias,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn alias_body(&self) -> AliasRequest {
        AliasRequest {
            alias: self.alias.clone(),
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        tracing::debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        tracing::debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// POST /find - Fetch the record matching `(id, resource_version)`.
    /// The `"Latest"` sentinel is sent as an empty version: the backend then
    /// resolves to the highest stored version.
    pub async fn find(&self, id: &str, resource_version: &str) -> Result<FindOutcome, AppError> {
        let resource_version = if is_latest(resource_version) {
            ""
        } else {
            resource_version
        };
        let body: Value = self
            .post(
                "/find",
                &FindRequest {
                    id: id.to_string(),
                    resource_version: resource_version.to_string(),
                    alias: self.alias.clone(),
                },
            )
            .await?;
        Ok(FindOutcome::from_value(body))
    }

    /// POST /keys - Fetch a key template for a new record of `category`.
    pub async fn keys(&self, category: &str, id: &str) -> Result<Record, AppError> {
        let body: Value = self
            .post(
                "/keys",
                &KeysRequest {
                    category: category.to_string(),
                    id: id.to_string(),
                },
            )
            .await?;
        Ok(Record::new(body))
    }

    /// POST /insert - Store a new record (or a new version of one).
    pub async fn insert(&self, resource: Value) -> Result<StatusResponse, AppError> {
        self.post(
            "/insert",
            &InsertRequest {
                resource,
                alias: self.alias.clone(),
            },
        )
        .await
    }

    /// POST /update - Replace a record, sending the original copy alongside
    /// so the backend can detect concurrent edits.
    pub async fn update(
        &self,
        resource: Value,
        original_resource: Value,
    ) -> Result<StatusResponse, AppError> {
        self.post(
            "/update",
            &UpdateRequest {
                resource,
                original_resource,
                alias: self.alias.clone(),
            },
        )
        .await
    }

    /// POST /delete - Delete the record identified by `resource`.
    pub async fn delete(&self, resource: Value) -> Result<StatusResponse, AppError> {
        self.post(
            "/delete",
            &DeleteRequest {
                resource,
                alias: self.alias.clone(),
            },
        )
        .await
    }

    /// POST /checkExists - Ask whether `(id, resource_version)` is stored.
    pub async fn check_exists(
        &self,
        id: &str,
        resource_version: &str,
    ) -> Result<bool, AppError> {
        let body: ExistsResponse = self
            .post(
                "/checkExists",
                &CheckExistsRequest {
                    id: id.to_string(),
                    resource_version: resource_version.to_string(),
                    alias: self.alias.clone(),
                },
            )
            .await?;
        Ok(body.exists)
    }

    /// POST /versions - List all known versions of `id`.
    pub async fn versions(&self, id: &str) -> Result<Vec<VersionEntry>, AppError> {
        self.post(
            "/versions",
            &VersionsRequest {
                id: id.to_string(),
                alias: self.alias.clone(),
            },
        )
        .await
    }

    /// POST /undo - Undo the last mutating operation of this session.
    pub async fn undo(&self) -> Result<StatusResponse, AppError> {
        self.post("/undo", &self.alias_body()).await
    }

    /// POST /redo - Redo the last undone operation of this session.
    pub async fn redo(&self) -> Result<StatusResponse, AppError> {
        self.post("/redo", &self.alias_body()).await
    }

    /// POST /getRevisionStatus - Disabled-flags for the undo/redo controls.
    pub async fn revision_status(&self) -> Result<RevisionStatus, AppError> {
        self.post("/getRevisionStatus", &self.alias_body()).await
    }

    /// GET /categories - Category list, loaded once at startup.
    pub async fn categories(&self) -> Result<Vec<String>, AppError> {
        self.get("/categories").await
    }

    /// GET /schema - JSON-schema document, loaded once at startup.
    pub async fn schema(&self) -> Result<Value, AppError> {
        self.get("/schema").await
    }

    /// POST /saveSession - Persist this session under its alias.
    pub async fn save_session(&self) -> Result<SessionHandle, AppError> {
        self.post("/saveSession", &self.alias_body()).await
    }

    /// POST /loadSession - Fetch the persisted session saved under `alias`.
    pub async fn load_session(&self, alias: &str) -> Result<SessionHandle, AppError> {
        self.post(
            "/loadSession",
            &AliasRequest {
                alias: Some(alias.to_string()),
            },
        )
        .await
    }

    /// GET /getSavedSessionsAliasList - Aliases of all persisted sessions.
    pub async fn saved_session_aliases(&self) -> Result<Vec<String>, AppError> {
        self.get("/getSavedSessionsAliasList").await
    }
}
