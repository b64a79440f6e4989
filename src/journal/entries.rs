/**
 * Journal Entry Model and Database Operations
 *
 * Every query here is owner-scoped: lookups, mutations, and deletions all
 * filter on `(id, owner_id)`, so an entry owned by someone else behaves
 * exactly like an entry that does not exist. Listings put favourites
 * first, with newest-first as the stable tiebreaker.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// Journal entry record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique entry id
    pub id: Uuid,
    /// Owning user's id, always derived from the caller's token
    pub owner_id: Uuid,
    /// Title of the memory
    pub title: String,
    /// Narrative text
    pub journal: String,
    /// Ordered list of visited locations
    pub visited_location: Vec<String>,
    /// URL of the stored image, if any
    pub image_url: Option<String>,
    /// When the trip happened
    pub visited_date: DateTime<Utc>,
    /// Favourites sort first in every listing
    pub is_favourite: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

const ENTRY_COLUMNS: &str = "id, owner_id, title, journal, visited_location, image_url, \
     visited_date, is_favourite, created_at";

/// Favourite entries first, then newest first; id breaks remaining ties
const ENTRY_ORDER: &str = "is_favourite DESC, created_at DESC, id";

/// Insert a new entry owned by `owner_id`
#[allow(clippy::too_many_arguments)]
pub async fn insert_entry(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
    journal: &str,
    visited_location: &[String],
    image_url: &str,
    visited_date: DateTime<Utc>,
) -> Result<JournalEntry, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let entry = sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        INSERT INTO journal_entries
            (id, owner_id, title, journal, visited_location, image_url,
             visited_date, is_favourite, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8)
        RETURNING {ENTRY_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(owner_id)
    .bind(title)
    .bind(journal)
    .bind(visited_location)
    .bind(image_url)
    .bind(visited_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(entry)
}

/// List every entry owned by `owner_id`, favourites first
pub async fn list_entries(pool: &PgPool, owner_id: Uuid) -> Result<Vec<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM journal_entries
        WHERE owner_id = $1
        ORDER BY {ENTRY_ORDER}
        "#
    ))
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Owner-scoped lookup of a single entry
pub async fn get_entry(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM journal_entries
        WHERE id = $1 AND owner_id = $2
        "#
    ))
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Apply an edit to an owner's entry
///
/// Returns `None` when no row matches `(id, owner_id)`.
#[allow(clippy::too_many_arguments)]
pub async fn update_entry(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    title: &str,
    journal: &str,
    visited_location: &[String],
    image_url: &str,
    visited_date: DateTime<Utc>,
) -> Result<Option<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        UPDATE journal_entries
        SET title = $3, journal = $4, visited_location = $5,
            image_url = $6, visited_date = $7
        WHERE id = $1 AND owner_id = $2
        RETURNING {ENTRY_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(owner_id)
    .bind(title)
    .bind(journal)
    .bind(visited_location)
    .bind(image_url)
    .bind(visited_date)
    .fetch_optional(pool)
    .await
}

/// Set the favourite flag on an owner's entry
pub async fn set_favourite(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    is_favourite: bool,
) -> Result<Option<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        UPDATE journal_entries
        SET is_favourite = $3
        WHERE id = $1 AND owner_id = $2
        RETURNING {ENTRY_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(owner_id)
    .bind(is_favourite)
    .fetch_optional(pool)
    .await
}

/// Delete an owner's entry; returns whether a row was removed
pub async fn delete_entry(pool: &PgPool, id: Uuid, owner_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM journal_entries
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Case-insensitive substring search over title, text, and locations
pub async fn search_entries(
    pool: &PgPool,
    owner_id: Uuid,
    query: &str,
) -> Result<Vec<JournalEntry>, sqlx::Error> {
    let pattern = like_pattern(query);

    sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM journal_entries
        WHERE owner_id = $1
          AND (title ILIKE $2
               OR journal ILIKE $2
               OR array_to_string(visited_location, ' ') ILIKE $2)
        ORDER BY {ENTRY_ORDER}
        "#
    ))
    .bind(owner_id)
    .bind(pattern)
    .fetch_all(pool)
    .await
}

/// Entries whose visited date falls inclusively within `[start, end]`
///
/// An inverted range matches nothing.
pub async fn filter_entries_by_date(
    pool: &PgPool,
    owner_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<JournalEntry>, sqlx::Error> {
    sqlx::query_as::<_, JournalEntry>(&format!(
        r#"
        SELECT {ENTRY_COLUMNS}
        FROM journal_entries
        WHERE owner_id = $1
          AND visited_date >= $2
          AND visited_date <= $3
        ORDER BY {ENTRY_ORDER}
        "#
    ))
    .bind(owner_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

/// Build an ILIKE pattern matching the query as a literal substring
///
/// `%`, `_`, and `\` in the query are escaped so they match themselves.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_in_wildcards() {
        assert_eq!(like_pattern("Wall"), "%Wall%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
        assert_eq!(like_pattern("back\\slash"), "%back\\\\slash%");
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "A Day at the Great Wall".to_string(),
            journal: "Walked further than planned.".to_string(),
            visited_location: vec!["Beijing".to_string(), "Mutianyu".to_string()],
            image_url: None,
            visited_date: Utc::now(),
            is_favourite: false,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("visitedLocation").is_some());
        assert!(json.get("visitedDate").is_some());
        assert!(json.get("isFavourite").is_some());
        assert!(json.get("ownerId").is_some());
        assert!(json.get("imageUrl").is_some());
    }
}
