//! Score synchronization for Clickrank.
//!
//! Reads and writes the authenticated user's click counter against the
//! keyed store, and establishes the record for first-time players.
//!
//! The load path has three outcomes, not two: a remote failure, a present
//! record, and an *absent* record. Absence is not an error — it means the
//! player authenticated for the first time, and the counter initializes
//! to zero while a fresh record is written back so future leaderboard
//! queries include them.

use clickrank_protocol::{paths, ErrorKind, Identity, Outcome, ScoreRecord, UserId};
use clickrank_remote::KeyedStore;
use serde_json::Value;

/// Loads the player's persisted click count.
///
/// - store failure → [`ErrorKind::FetchFailed`]
/// - record absent (first login) → `0`, and a fresh
///   `{username, clicks: 0}` record is written back. The write-back is
///   best-effort: a failure is logged but the counter still initializes,
///   and the next save re-establishes the record.
/// - record present → the stored `clicks` value. A legacy record missing
///   its `clicks` field reads as `0`.
pub async fn load_score<S: KeyedStore>(
    store: &S,
    identity: &Identity,
) -> Outcome<u64> {
    let path = paths::user(&identity.user_id);

    let snapshot = match store.get(&path).await {
        Ok(snapshot) => snapshot,
        Err(error) => {
            tracing::warn!(%path, %error, "score fetch failed");
            return Err(ErrorKind::FetchFailed);
        }
    };

    match snapshot {
        None => {
            // First login: establish the record so the player is ranked
            // (at zero) from here on.
            let record = ScoreRecord::fresh(&identity.display_name);
            match serde_json::to_value(&record) {
                Ok(value) => {
                    if let Err(error) = store.set(&path, value).await {
                        tracing::warn!(
                            %path,
                            %error,
                            "failed to establish fresh score record"
                        );
                    } else {
                        tracing::info!(
                            user_id = %identity.user_id,
                            "score record initialized"
                        );
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "score record encode failed");
                }
            }
            Ok(0)
        }
        Some(snapshot) => {
            Ok(snapshot.child_u64(paths::CLICKS_FIELD).unwrap_or(0))
        }
    }
}

/// Increments the counter by exactly one and persists the new value.
///
/// Local-then-remote: the caller shows `current + 1` optimistically
/// before this resolves, and a [`ErrorKind::SaveFailed`] does not roll
/// that display back — the failure is reported, not silently corrected.
pub async fn increment_and_save<S: KeyedStore>(
    store: &S,
    user_id: &UserId,
    current: u64,
) -> Outcome<u64> {
    let next = current + 1;
    let path = paths::clicks(user_id);

    match store.set(&path, Value::from(next)).await {
        Ok(()) => {
            tracing::debug!(%user_id, clicks = next, "score saved");
            Ok(next)
        }
        Err(error) => {
            tracing::warn!(%path, %error, "score save failed");
            Err(ErrorKind::SaveFailed)
        }
    }
}
