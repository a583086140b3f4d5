//! Leaderboard aggregation for Clickrank.
//!
//! One ranked range query against the keyed store, transformed into the
//! ordered view the presentation layer renders. The store answers in its
//! native ascending order; the board presents highest-first by walking
//! the result in reverse, so ties keep the store's stable order with no
//! secondary sort key.

use clickrank_protocol::{paths, ErrorKind, LeaderboardEntry, Outcome};
use clickrank_remote::KeyedStore;

/// Builds the ranked leaderboard view.
///
/// Returns a fresh sequence on every call — nothing is cached, and the
/// caller discards any previous view before rendering this one. A child
/// record with no username cannot be rendered and is skipped with a
/// warning; a record with no clicks counts as zero.
pub async fn load_leaderboard<S: KeyedStore>(
    store: &S,
) -> Outcome<Vec<LeaderboardEntry>> {
    let snapshots = match store
        .query_ordered_by_child(paths::USERS, paths::CLICKS_FIELD)
        .await
    {
        Ok(snapshots) => snapshots,
        Err(error) => {
            tracing::warn!(%error, "leaderboard query failed");
            return Err(ErrorKind::FetchFailed);
        }
    };

    let mut entries = Vec::with_capacity(snapshots.len());
    for snapshot in snapshots.iter().rev() {
        let Some(username) = snapshot.child_str(paths::USERNAME_FIELD)
        else {
            tracing::warn!(
                key = snapshot.key(),
                "skipping score record with no username"
            );
            continue;
        };
        entries.push(LeaderboardEntry {
            username: username.to_string(),
            clicks: snapshot.child_u64(paths::CLICKS_FIELD).unwrap_or(0),
        });
    }

    tracing::debug!(entries = entries.len(), "leaderboard built");
    Ok(entries)
}
