//! `sync` and `publish` command bodies.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context};
use rotation::{DayPairs, PairingBoard};
use tracing::{info, warn};

/// Reads the board and prints the snapshot as JSON.
///
/// With `strict`, a pairing list with an unreadable date fails the command
/// after the snapshot has been printed.
pub async fn sync(board: &PairingBoard, strict: bool) -> anyhow::Result<()> {
    let snapshot = board.sync().await.context("Board sync failed")?;
    for issue in snapshot.issues() {
        warn!(list = %issue.list_name, error = %issue.error, "Pairing list skipped");
    }

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &snapshot).context("Failed to write snapshot")?;
    writeln!(stdout)?;

    if strict && !snapshot.issues().is_empty() {
        bail!(
            "{} pairing list(s) have an unreadable date",
            snapshot.issues().len()
        );
    }
    Ok(())
}

/// Publishes the day in `day_path` to the board.
pub async fn publish(
    board: &PairingBoard,
    day_path: &Path,
    days_into_future: u32,
) -> anyhow::Result<()> {
    let day = read_day(day_path)?;
    let snapshot = board.sync().await.context("Board sync failed")?;

    for (track, pair) in day.iter() {
        for id in pair.developers() {
            if !snapshot.is_available(id) {
                warn!(%track, developer = %id, "Developer is not listed as available");
            }
        }
    }

    let published = board
        .materialize_day(snapshot.tracks(), &day, days_into_future)
        .await
        .context("Publishing failed; cards created before the failure remain on the board")?;
    info!(list = %published.list_name, cards = published.cards.len(), "Day published");

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &published).context("Failed to write result")?;
    writeln!(stdout)?;
    Ok(())
}

/// Loads a [`DayPairs`] document produced by the pairing algorithm.
pub fn read_day(path: &Path) -> anyhow::Result<DayPairs> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read day file {}", path.display()))?;
    let day: DayPairs = serde_json::from_str(&text)
        .with_context(|| format!("Invalid day file {}", path.display()))?;

    for (track, pair) in day.iter() {
        if track.as_str().trim().is_empty() {
            bail!("Day file {} has a pair without a track", path.display());
        }
        if pair.developers().iter().any(|id| id.as_str().trim().is_empty()) {
            bail!("Track '{track}' in {} has an empty developer id", path.display());
        }
    }
    Ok(day)
}
