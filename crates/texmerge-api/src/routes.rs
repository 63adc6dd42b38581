//! Request handlers for the merge service.

use axum::Json;
use serde::{Deserialize, Serialize};

use texmerge_core::{find_main_file, merge_document, paths, rebase_file_map, FileMap};

use crate::error::Result;

/// Body of a merge request: the entry-point identifier plus every file in
/// the project, keyed by relative path.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeRequest {
    /// Name or path of the main document
    pub main_file: String,
    /// Map from relative path to full file content
    pub files: FileMap,
}

/// Successful merge response.
#[derive(Debug, Clone, Serialize)]
pub struct MergeResponse {
    /// The fully flattened document
    pub merged_content: String,
}

/// Version report.
#[derive(Debug, Clone, Serialize)]
pub struct VersionResponse {
    /// The running crate version
    pub version: String,
}

/// `POST /merge` — flatten a client-submitted file set.
///
/// The main file is located in the submitted map, the map is rebased onto
/// its directory, and the merge runs with an empty context so includes
/// inside a nested project resolve against the rebased keys.
pub async fn merge(Json(request): Json<MergeRequest>) -> Result<Json<MergeResponse>> {
    let main_file = find_main_file(&request.files, &request.main_file)?.to_string();
    tracing::info!(
        "merging {} files with '{main_file}' as the main document",
        request.files.len()
    );

    let main_content = request.files[&main_file].clone();
    let files = rebase_file_map(&request.files, paths::parent(&main_file));
    let merged_content = merge_document(&main_content, &files, "")?;

    Ok(Json(MergeResponse { merged_content }))
}

/// `GET /version` — report the running crate version.
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Tests
// ============================================================================
