//! Repository for the `sessions` table.

use beacon_core::session::NormalizedSession;
use sqlx::PgPool;

use crate::models::session::SessionRow;

/// Column list for `sessions` queries.
const SESSION_COLUMNS: &str = "session_id, label, occurred_at, local_display_time, mouse_path, \
     scroll_depth, click_delay, click_positions, total_clicks, ad_clicks, hover_times, \
     session_duration, fingerprint, ad_hover_time, ad_visible_time, ad_click_coordinates, \
     ad_visibility_changes, ad_dwell_time, ad_click_accuracy, repeated_ad_clicks, \
     scroll_to_ad_time";

/// Result of an idempotent put: either the row was written, or an earlier
/// submission already claimed the key and the call was a no-op.
///
/// Both are success from the caller's perspective; they are distinguished
/// for observability only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Inserted,
    Skipped,
}

/// Provides write and lookup operations for session records.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a session record unless its `session_id` already exists.
    ///
    /// First write wins: a duplicate key is a silent no-op, not an error and
    /// not an overwrite, so client-side retries and double-fired sends can
    /// never produce a second row or clobber the original. Mutual exclusion
    /// lives entirely in the primary key constraint, not in-process state,
    /// so the guarantee holds across concurrent service instances.
    pub async fn insert_if_absent(
        pool: &PgPool,
        session: &NormalizedSession,
    ) -> Result<PutOutcome, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sessions (
                 session_id, label, occurred_at, local_display_time, mouse_path,
                 scroll_depth, click_delay, click_positions, total_clicks, ad_clicks,
                 hover_times, session_duration, fingerprint, ad_hover_time,
                 ad_visible_time, ad_click_coordinates, ad_visibility_changes,
                 ad_dwell_time, ad_click_accuracy, repeated_ad_clicks, scroll_to_ad_time
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                       $16, $17, $18, $19, $20, $21)
             ON CONFLICT (session_id) DO NOTHING",
        )
        .bind(&session.session_id)
        .bind(&session.label)
        .bind(session.occurred_at)
        .bind(&session.local_display_time)
        .bind(&session.mouse_path)
        .bind(session.scroll_depth)
        .bind(session.click_delay)
        .bind(&session.click_positions)
        .bind(session.total_clicks)
        .bind(session.ad_clicks)
        .bind(&session.hover_times)
        .bind(session.session_duration)
        .bind(&session.fingerprint)
        .bind(session.ad_hover_time)
        .bind(session.ad_visible_time)
        .bind(&session.ad_click_coordinates)
        .bind(&session.ad_visibility_changes)
        .bind(session.ad_dwell_time)
        .bind(session.ad_click_accuracy)
        .bind(session.repeated_ad_clicks)
        .bind(session.scroll_to_ad_time)
        .execute(pool)
        .await?;

        if result.rows_affected() == 1 {
            Ok(PutOutcome::Inserted)
        } else {
            tracing::debug!(
                session_id = %session.session_id,
                "Duplicate session submission skipped"
            );
            Ok(PutOutcome::Skipped)
        }
    }

    /// Fetch a session record by its identifier.
    pub async fn get(pool: &PgPool, session_id: &str) -> Result<Option<SessionRow>, sqlx::Error> {
        let query = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE session_id = $1");
        sqlx::query_as::<_, SessionRow>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored sessions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
            .fetch_one(pool)
            .await
    }
}
