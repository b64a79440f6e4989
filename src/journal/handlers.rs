/**
 * Journal Handlers
 *
 * HTTP handlers for journal CRUD, search, and date filtering. The owner
 * id always comes from the verified token; client-supplied ids only ever
 * select within the caller's own entries.
 *
 * # Routes
 *
 * - `POST /add-travel-journal` - Create an entry
 * - `GET /get-all-journals` - List the caller's entries
 * - `PUT /edit-journal/{id}` - Edit an entry
 * - `DELETE /delete-journal/{id}` - Delete an entry and its stored image
 * - `PUT /update-is-favourite/{id}` - Set the favourite flag
 * - `GET /search?query=` - Substring search
 * - `GET /travel-journals/filter?startDate=&endDate=` - Date-range filter
 */

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;
use crate::journal::entries::{
    delete_entry, filter_entries_by_date, get_entry, insert_entry, list_entries, search_entries,
    set_favourite, update_entry, JournalEntry,
};
use crate::media::storage;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Epoch-millisecond timestamp, accepted as a JSON number or numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EpochMillis {
    Number(i64),
    Text(String),
}

impl EpochMillis {
    /// Convert to a UTC datetime; `None` for non-numeric or negative input
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let millis = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        parse_epoch_millis(millis)
    }
}

/// Convert non-negative epoch milliseconds to a UTC datetime
pub fn parse_epoch_millis(millis: i64) -> Option<DateTime<Utc>> {
    if millis < 0 {
        return None;
    }
    Utc.timestamp_millis_opt(millis).single()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddJournalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub visited_location: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visited_date: Option<EpochMillis>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditJournalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub visited_location: Option<Vec<String>>,
    /// Optional on edit; the placeholder image is substituted when absent
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub visited_date: Option<EpochMillis>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteRequest {
    #[serde(default)]
    pub is_favourite: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JournalResponse {
    pub journal: JournalEntry,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct JournalListResponse {
    pub journals: Vec<JournalEntry>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn parse_visited_date(value: &Option<EpochMillis>) -> Result<DateTime<Utc>, ApiError> {
    value
        .as_ref()
        .and_then(EpochMillis::to_datetime)
        .ok_or_else(|| ApiError::validation("visitedDate must be a timestamp in milliseconds"))
}

/// Create handler for POST /add-travel-journal
pub async fn add_journal(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(request): Json<AddJournalRequest>,
) -> Result<Json<JournalResponse>, ApiError> {
    let (title, journal, image_url) = match (
        non_empty(&request.title),
        non_empty(&request.journal),
        non_empty(&request.image_url),
    ) {
        (Some(title), Some(journal), Some(image_url)) => (title, journal, image_url),
        _ => return Err(ApiError::validation("All fields are required")),
    };
    // A present-but-empty location list is accepted; only an absent field fails.
    let visited_location = request
        .visited_location
        .as_deref()
        .ok_or_else(|| ApiError::validation("All fields are required"))?;
    if request.visited_date.is_none() {
        return Err(ApiError::validation("All fields are required"));
    }
    let visited_date = parse_visited_date(&request.visited_date)?;

    let entry = insert_entry(
        &state.db_pool,
        identity.user_id,
        title,
        journal,
        visited_location,
        image_url,
        visited_date,
    )
    .await?;

    tracing::info!("Journal entry created: {} by {}", entry.id, identity.user_id);

    Ok(Json(JournalResponse {
        journal: entry,
        message: "Journal added successfully".to_string(),
    }))
}

/// List handler for GET /get-all-journals
pub async fn get_all_journals(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<JournalListResponse>, ApiError> {
    let journals = list_entries(&state.db_pool, identity.user_id).await?;
    Ok(Json(JournalListResponse { journals }))
}

/// Edit handler for PUT /edit-journal/{id}
pub async fn edit_journal(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<EditJournalRequest>,
) -> Result<Json<JournalResponse>, ApiError> {
    let (title, journal) = match (non_empty(&request.title), non_empty(&request.journal)) {
        (Some(title), Some(journal)) => (title, journal),
        _ => return Err(ApiError::validation("All fields are required")),
    };
    let visited_location = request
        .visited_location
        .as_deref()
        .ok_or_else(|| ApiError::validation("All fields are required"))?;
    if request.visited_date.is_none() {
        return Err(ApiError::validation("All fields are required"));
    }
    let visited_date = parse_visited_date(&request.visited_date)?;

    let image_url = non_empty(&request.image_url)
        .map(str::to_string)
        .unwrap_or_else(|| state.config.placeholder_image_url());

    let entry = update_entry(
        &state.db_pool,
        id,
        identity.user_id,
        title,
        journal,
        visited_location,
        &image_url,
        visited_date,
    )
    .await?
    .ok_or_else(|| ApiError::not_found("Travel journal not found"))?;

    Ok(Json(JournalResponse {
        journal: entry,
        message: "Journal updated successfully".to_string(),
    }))
}

/// Delete handler for DELETE /delete-journal/{id}
///
/// Removing the database row is authoritative; deleting the stored image
/// file afterwards is advisory cleanup whose failure is only logged.
pub async fn delete_journal(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let entry = get_entry(&state.db_pool, id, identity.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Travel journal not found"))?;

    delete_entry(&state.db_pool, id, identity.user_id).await?;

    if let Some(image_url) = entry.image_url.as_deref() {
        if let Some(filename) = storage::filename_from_url(image_url) {
            match storage::remove(&state.config.uploads_dir, &filename).await {
                Ok(true) => {
                    tracing::debug!("Deleted image file {}", filename);
                }
                Ok(false) => {
                    tracing::debug!("Image file already absent: {}", filename);
                }
                Err(e) => {
                    tracing::warn!("Failed to delete image file {}: {}", filename, e);
                }
            }
        }
    }

    tracing::info!("Journal entry deleted: {} by {}", id, identity.user_id);

    Ok(Json(MessageResponse {
        message: "Travel journal deleted successfully".to_string(),
    }))
}

/// Favourite handler for PUT /update-is-favourite/{id}
pub async fn update_is_favourite(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<FavouriteRequest>,
) -> Result<Json<JournalResponse>, ApiError> {
    let is_favourite = request
        .is_favourite
        .ok_or_else(|| ApiError::validation("isFavourite is required"))?;

    let entry = set_favourite(&state.db_pool, id, identity.user_id, is_favourite)
        .await?
        .ok_or_else(|| ApiError::not_found("Travel journal not found"))?;

    Ok(Json(JournalResponse {
        journal: entry,
        message: "Updated successfully".to_string(),
    }))
}

/// Search handler for GET /search
pub async fn search_journals(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<JournalListResponse>, ApiError> {
    let query = params
        .query
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::missing_query("Query is required"))?;

    let journals = search_entries(&state.db_pool, identity.user_id, query).await?;
    Ok(Json(JournalListResponse { journals }))
}

/// Filter handler for GET /travel-journals/filter
pub async fn filter_journals(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Query(params): Query<FilterParams>,
) -> Result<Json<JournalListResponse>, ApiError> {
    let start = parse_query_date(params.start_date.as_deref())?;
    let end = parse_query_date(params.end_date.as_deref())?;

    let journals = filter_entries_by_date(&state.db_pool, identity.user_id, start, end).await?;
    Ok(Json(JournalListResponse { journals }))
}

fn parse_query_date(raw: Option<&str>) -> Result<DateTime<Utc>, ApiError> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(parse_epoch_millis)
        .ok_or_else(|| {
            ApiError::validation("startDate and endDate must be timestamps in milliseconds")
        })
}
