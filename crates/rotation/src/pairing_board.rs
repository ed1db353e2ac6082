//! Board reader and writer.
//!
//! [`PairingBoard::sync`] parses the board into a [`BoardSnapshot`];
//! [`PairingBoard::materialize_day`] serialises a computed [`DayPairs`] back as
//! a new pairing list. Both use the list grammar in [`crate::classify`], the
//! date codec in [`crate::dates`], and one shared [`LabelScheme`], so anything
//! written here reads back unchanged.
//!
//! ## Write model
//!
//! Publishing is a sequence of independent board calls: create the list, then
//! for each track create a card and attach its labels. The first failure
//! aborts the sequence and nothing already created is removed. Re-running a
//! publish for the same day creates a second list.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::classify::{classify_list, ListKind};
use crate::dates::{date_from_list_name, future_date, pairing_list_name};
use crate::{
    BoardId, BoardService, BoardSnapshot, CardId, DayPairs, LabelScheme, ListId, ListIssue,
    RotationError, SyncRunId, Track,
};

/// One card created by [`PairingBoard::materialize_day`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedCard {
    pub track: Track,
    pub card_id: CardId,
}

/// The result of publishing a day to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializedDay {
    /// Id of the newly created pairing list.
    pub list_id: ListId,
    /// Title of the new list, `pairing(dd/mm/yyyy)`.
    pub list_name: String,
    /// The date written into the title.
    pub date: NaiveDate,
    /// Cards in creation order (reverse track order).
    pub cards: Vec<PublishedCard>,
    /// Tracks of the day that are not declared on the board; not written.
    pub unknown_tracks: Vec<Track>,
}

/// Reads and writes the pairing board through a [`BoardService`].
#[derive(Clone)]
pub struct PairingBoard {
    service: Arc<dyn BoardService>,
    board_id: BoardId,
    labels: LabelScheme,
}

impl PairingBoard {
    pub fn new(service: Arc<dyn BoardService>, board_id: BoardId) -> Self {
        Self {
            service,
            board_id,
            labels: LabelScheme::default(),
        }
    }

    #[must_use]
    pub fn with_label_scheme(mut self, labels: LabelScheme) -> Self {
        self.labels = labels;
        self
    }

    /// Reads every list on the board into a fresh [`BoardSnapshot`].
    ///
    /// Lists are handled one at a time in board order. Pairing lists with an
    /// unreadable date are recorded in [`BoardSnapshot::issues`] and skipped;
    /// any board error aborts the sync.
    pub async fn sync(&self) -> Result<BoardSnapshot, RotationError> {
        let run_id = SyncRunId::new_random();
        let span = info_span!("board_sync", %run_id, board_id = %self.board_id);
        self.sync_lists(run_id).instrument(span).await
    }

    async fn sync_lists(&self, run_id: SyncRunId) -> Result<BoardSnapshot, RotationError> {
        let mut snapshot = BoardSnapshot::new(run_id);
        let lists = self.service.list_board_lists(&self.board_id).await?;
        debug!(lists = lists.len(), "Fetched board lists");

        for list in lists {
            match classify_list(&list.name) {
                ListKind::Roster => {
                    let cards = self.service.list_cards(&list.id).await?;
                    snapshot.apply_roster_cards(&cards);
                }
                ListKind::Tracks => {
                    let cards = self.service.list_cards(&list.id).await?;
                    snapshot.apply_track_cards(&cards);
                }
                ListKind::Pairing => match date_from_list_name(&list.name) {
                    Ok(date) => {
                        let cards = self.service.list_cards(&list.id).await?;
                        snapshot.apply_pairing_cards(date, &cards, &self.labels);
                    }
                    Err(error) => {
                        warn!(list = %list.name, %error, "Skipping pairing list with unreadable date");
                        snapshot.record_issue(ListIssue {
                            list_id: list.id,
                            list_name: list.name,
                            error,
                        });
                    }
                },
                ListKind::Ignored => debug!(list = %list.name, "Ignoring list"),
            }
        }

        info!(
            developers = snapshot.registry().developer_count(),
            available = snapshot.available().len(),
            tracks = snapshot.tracks().len(),
            days = snapshot.past_pairs().len(),
            issues = snapshot.issues().len(),
            "Board sync complete"
        );
        Ok(snapshot)
    }

    /// Publishes `day` as a new pairing list dated `days_into_future` days
    /// after the day's own date.
    ///
    /// Cards are created in reverse `tracks` order so the first declared track
    /// ends up on top of the new list. Tracks without a pair get no card.
    pub async fn materialize_day(
        &self,
        tracks: &[Track],
        day: &DayPairs,
        days_into_future: u32,
    ) -> Result<MaterializedDay, RotationError> {
        let date = future_date(day.date(), days_into_future)?;
        let list_name = pairing_list_name(date);
        let span = info_span!("materialize_day", board_id = %self.board_id, list = %list_name);
        self.write_day(tracks, day, date, list_name).instrument(span).await
    }

    async fn write_day(
        &self,
        tracks: &[Track],
        day: &DayPairs,
        date: NaiveDate,
        list_name: String,
    ) -> Result<MaterializedDay, RotationError> {
        let unknown_tracks: Vec<Track> = day
            .tracks()
            .filter(|track| !tracks.contains(track))
            .cloned()
            .collect();
        for track in &unknown_tracks {
            warn!(%track, "Track is not declared on the board; not publishing its pair");
        }

        let list_id = self.service.create_list(&self.board_id, &list_name).await?;
        debug!(%list_id, "Created pairing list");

        let mut cards = Vec::new();
        for track in tracks.iter().rev() {
            let Some(pair) = day.pair(track) else {
                continue;
            };
            let card_id = self
                .service
                .create_card(&list_id, track.as_str(), pair.developers())
                .await?;
            if pair.is_build_pair() {
                self.service.add_label(&card_id, &self.labels.build_pair).await?;
            }
            if pair.is_community_pair() {
                self.service
                    .add_label(&card_id, &self.labels.community_pair)
                    .await?;
            }
            debug!(%track, %card_id, developers = pair.developers().len(), "Created pairing card");
            cards.push(PublishedCard {
                track: track.clone(),
                card_id,
            });
        }

        info!(cards = cards.len(), "Published pairing day");
        Ok(MaterializedDay {
            list_id,
            list_name,
            date,
            cards,
            unknown_tracks,
        })
    }
}

impl std::fmt::Debug for PairingBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairingBoard")
            .field("board_id", &self.board_id)
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}
