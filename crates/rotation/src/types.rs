//! Shared value types for the pair rotation domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! state with invariants (a pair never lists the same developer twice, a day
//! maps each track to at most one pair) and are what the board codec reads
//! and writes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{CompanyName, DeveloperId, Track};

// ---------------------------------------------------------------------------
// Roster entities
// ---------------------------------------------------------------------------

/// A developer known to the board.
///
/// Identity and equality are defined solely by [`Developer::id`]. Instances
/// live in the [`crate::EntityRegistry`]; everything else refers to them by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Developer {
    id: DeveloperId,
    company: Option<CompanyName>,
    on_duty: bool,
    is_new: bool,
}

impl Developer {
    /// Creates a developer with no company and both flags cleared.
    pub fn new(id: DeveloperId) -> Self {
        Self {
            id,
            company: None,
            on_duty: false,
            is_new: false,
        }
    }

    pub fn id(&self) -> &DeveloperId {
        &self.id
    }

    /// The company this developer works for, if a roster card named one.
    pub fn company(&self) -> Option<&CompanyName> {
        self.company.as_ref()
    }

    pub fn set_company(&mut self, company: CompanyName) {
        self.company = Some(company);
    }

    /// Whether this developer is the developer on duty.
    pub fn on_duty(&self) -> bool {
        self.on_duty
    }

    /// Whether this developer was listed on the roster's `new` card.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn set_new(&mut self, is_new: bool) {
        self.is_new = is_new;
    }
}

impl PartialEq for Developer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Developer {}

impl std::hash::Hash for Developer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Developer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

// ---------------------------------------------------------------------------

/// A company developers belong to.
///
/// Identity is the name. Companies named on a `devops:` roster card are
/// flagged so the pairing algorithm can treat their developers specially.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    name: CompanyName,
    is_devops: bool,
}

impl Company {
    pub fn new(name: CompanyName) -> Self {
        Self {
            name,
            is_devops: false,
        }
    }

    pub fn name(&self) -> &CompanyName {
        &self.name
    }

    pub fn is_devops(&self) -> bool {
        self.is_devops
    }

    pub fn set_devops(&mut self, is_devops: bool) {
        self.is_devops = is_devops;
    }
}

impl PartialEq for Company {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Company {}

// ---------------------------------------------------------------------------
// Pairings
// ---------------------------------------------------------------------------

/// The developers assigned to one track on one day.
///
/// Developers keep the order the board returned them in. Repeated ids are
/// dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "PairDocument")]
pub struct Pair {
    developers: Vec<DeveloperId>,
    is_build_pair: bool,
    is_community_pair: bool,
}

impl Pair {
    /// Creates a pair from developer ids, keeping the first occurrence of each.
    pub fn new(developers: impl IntoIterator<Item = DeveloperId>) -> Self {
        let mut unique: Vec<DeveloperId> = Vec::new();
        for id in developers {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            developers: unique,
            is_build_pair: false,
            is_community_pair: false,
        }
    }

    #[must_use]
    pub fn with_build_pair(mut self, is_build_pair: bool) -> Self {
        self.is_build_pair = is_build_pair;
        self
    }

    #[must_use]
    pub fn with_community_pair(mut self, is_community_pair: bool) -> Self {
        self.is_community_pair = is_community_pair;
        self
    }

    pub fn developers(&self) -> &[DeveloperId] {
        &self.developers
    }

    pub fn contains(&self, id: &DeveloperId) -> bool {
        self.developers.contains(id)
    }

    /// Whether this pair is on build duty.
    pub fn is_build_pair(&self) -> bool {
        self.is_build_pair
    }

    /// Whether this pair is on community duty.
    pub fn is_community_pair(&self) -> bool {
        self.is_community_pair
    }
}

/// Serialised shape of a [`Pair`]; routed through [`Pair::new`] so documents
/// with repeated developers are deduplicated on load.
#[derive(Deserialize)]
struct PairDocument {
    developers: Vec<DeveloperId>,
    #[serde(default)]
    is_build_pair: bool,
    #[serde(default)]
    is_community_pair: bool,
}

impl From<PairDocument> for Pair {
    fn from(doc: PairDocument) -> Self {
        Pair::new(doc.developers)
            .with_build_pair(doc.is_build_pair)
            .with_community_pair(doc.is_community_pair)
    }
}

// ---------------------------------------------------------------------------

/// A full day's track-to-pair assignment.
///
/// A track missing from the map had no pair that day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPairs {
    date: NaiveDate,
    pairs: BTreeMap<Track, Pair>,
}

impl DayPairs {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            pairs: BTreeMap::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Assigns `pair` to `track`, returning the pair it replaced, if any.
    pub fn insert(&mut self, track: Track, pair: Pair) -> Option<Pair> {
        self.pairs.insert(track, pair)
    }

    pub fn pair(&self, track: &Track) -> Option<&Pair> {
        self.pairs.get(track)
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.pairs.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Track, &Pair)> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// A board label colour (e.g. `"orange"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelColor(String);

impl LabelColor {
    /// Creates a [`LabelColor`], returning `None` if the string is empty.
    pub fn new(color: impl Into<String>) -> Option<Self> {
        let c = color.into();
        if c.is_empty() {
            None
        } else {
            Some(Self(c))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LabelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------

/// Label colours that mark pair attributes on pairing cards.
///
/// Reader and writer share one scheme so a card written by
/// [`crate::PairingBoard::materialize_day`] reads back with the same flags.
/// Labels of any other colour are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelScheme {
    pub build_pair: LabelColor,
    pub community_pair: LabelColor,
}

impl LabelScheme {
    pub const DEFAULT_BUILD_PAIR_COLOR: &'static str = "orange";
    pub const DEFAULT_COMMUNITY_PAIR_COLOR: &'static str = "green";
}

impl Default for LabelScheme {
    fn default() -> Self {
        Self {
            build_pair: LabelColor(Self::DEFAULT_BUILD_PAIR_COLOR.to_string()),
            community_pair: LabelColor(Self::DEFAULT_COMMUNITY_PAIR_COLOR.to_string()),
        }
    }
}
