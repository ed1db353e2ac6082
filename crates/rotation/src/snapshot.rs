//! The typed model reconstructed from one read of the board, and the card
//! interpreter that builds it.
//!
//! A [`BoardSnapshot`] owns the [`EntityRegistry`] for its run. Historical
//! [`DayPairs`] hold developer ids only; resolving them through
//! [`BoardSnapshot::registry`] always yields the latest state of each developer,
//! whichever list the information came from.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::classify::{classify_roster_card, RosterCard};
use crate::{
    BoardCard, Company, DateError, DayPairs, Developer, DeveloperId, EntityRegistry,
    LabelScheme, ListId, Pair, SyncRunId, Track,
};

/// A pairing list that was skipped because its date could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListIssue {
    pub list_id: ListId,
    pub list_name: String,
    #[serde(serialize_with = "serialize_display")]
    pub error: DateError,
}

fn serialize_display<S: serde::Serializer>(
    error: &DateError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Everything one sync learned from the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    run_id: SyncRunId,
    registry: EntityRegistry,
    available: BTreeSet<DeveloperId>,
    tracks: Vec<Track>,
    past_pairs: Vec<DayPairs>,
    issues: Vec<ListIssue>,
}

impl BoardSnapshot {
    /// An empty snapshot with a fresh registry.
    pub fn new(run_id: SyncRunId) -> Self {
        Self {
            run_id,
            registry: EntityRegistry::new(),
            available: BTreeSet::new(),
            tracks: Vec::new(),
            past_pairs: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn run_id(&self) -> SyncRunId {
        self.run_id
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Ids of developers listed on a `devs` roster card.
    pub fn available(&self) -> &BTreeSet<DeveloperId> {
        &self.available
    }

    pub fn is_available(&self, id: &DeveloperId) -> bool {
        self.available.contains(id)
    }

    /// Available developers, in the order they were first seen on the board.
    pub fn available_developers(&self) -> impl Iterator<Item = &Developer> {
        self.registry
            .developers()
            .filter(|developer| self.available.contains(developer.id()))
    }

    /// Tracks in declaration order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Historical days in board list order.
    pub fn past_pairs(&self) -> &[DayPairs] {
        &self.past_pairs
    }

    /// The most recent historical day, if any.
    pub fn latest_day(&self) -> Option<&DayPairs> {
        self.past_pairs.iter().max_by_key(|day| day.date())
    }

    /// Pairing lists skipped because of an unreadable date.
    pub fn issues(&self) -> &[ListIssue] {
        &self.issues
    }

    pub fn developer(&self, id: &DeveloperId) -> Option<&Developer> {
        self.registry.find_developer(id)
    }

    pub fn developer_company(&self, id: &DeveloperId) -> Option<&Company> {
        self.registry.company_of(id)
    }

    pub fn is_devops_developer(&self, id: &DeveloperId) -> bool {
        self.registry.is_devops_developer(id)
    }

    /// Resolves the developers of `pair` through this snapshot's registry.
    pub fn pair_developers<'a>(&'a self, pair: &'a Pair) -> impl Iterator<Item = &'a Developer> + 'a {
        pair.developers()
            .iter()
            .filter_map(|id| self.registry.find_developer(id))
    }

    // -----------------------------------------------------------------------
    // Card interpretation
    // -----------------------------------------------------------------------

    /// Applies the cards of a `devs` list to the registry.
    pub fn apply_roster_cards(&mut self, cards: &[BoardCard]) {
        for card in cards {
            match classify_roster_card(&card.name) {
                RosterCard::Available => {
                    for id in card.developer_ids() {
                        self.registry.developer(&id);
                        self.available.insert(id);
                    }
                }
                RosterCard::DevOps(companies) => {
                    for name in &companies {
                        self.registry.company(name).set_devops(true);
                    }
                    debug!(card = %card.name, companies = companies.len(), "DevOps companies declared");
                }
                RosterCard::Newcomers => {
                    for id in card.developer_ids() {
                        self.registry.developer(&id).set_new(true);
                    }
                }
                RosterCard::Company(company) => {
                    self.registry.company(&company);
                    for id in card.developer_ids() {
                        self.registry.developer(&id).set_company(company.clone());
                    }
                }
                RosterCard::Blank => {
                    debug!(card_id = %card.id, "Skipping roster card with empty title");
                }
            }
        }
    }

    /// Appends the cards of a `tracks` list as tracks, in card order.
    pub fn apply_track_cards(&mut self, cards: &[BoardCard]) {
        for card in cards {
            match Track::new(card.name.as_str()) {
                Some(track) if self.tracks.contains(&track) => {
                    warn!(track = %track, "Track declared twice; keeping first position");
                }
                Some(track) => self.tracks.push(track),
                None => debug!(card_id = %card.id, "Skipping track card with empty title"),
            }
        }
    }

    /// Reads the cards of a pairing list into one historical day.
    pub fn apply_pairing_cards(&mut self, date: NaiveDate, cards: &[BoardCard], labels: &LabelScheme) {
        let mut day = DayPairs::new(date);
        for card in cards {
            let Some(track) = Track::new(card.name.as_str()) else {
                debug!(card_id = %card.id, "Skipping pairing card with empty title");
                continue;
            };
            if !card.description.is_empty() {
                debug!(track = %track, description = %card.description, "Pairing card description");
            }
            let developers: Vec<DeveloperId> = card.developer_ids().collect();
            for id in &developers {
                self.registry.developer(id);
            }
            let pair = Pair::new(developers)
                .with_build_pair(card.has_label_color(&labels.build_pair))
                .with_community_pair(card.has_label_color(&labels.community_pair));
            if day.insert(track.clone(), pair).is_some() {
                warn!(track = %track, %date, "Track paired twice on one day; keeping the later card");
            }
        }
        self.past_pairs.push(day);
    }

    pub fn record_issue(&mut self, issue: ListIssue) {
        self.issues.push(issue);
    }
}
