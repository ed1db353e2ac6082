//! Port trait for the external kanban board.
//!
//! The domain reads lists and cards through [`BoardService`] and writes new
//! pairing lists back through it. Infrastructure crates (see the `trello`
//! crate) implement the trait; the domain never sees HTTP or credentials.
//!
//! Calls are issued one at a time by [`crate::PairingBoard`]; implementations
//! do not need to support overlapping requests from a single run.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{BoardError, BoardId, CardId, DeveloperId, LabelColor, ListId};

/// A list (column) on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: ListId,
    pub name: String,
}

/// A coloured label attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLabel {
    pub id: String,
    /// `None` for colourless labels.
    pub color: Option<LabelColor>,
}

/// A card as returned by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard {
    pub id: CardId,
    pub name: String,
    pub description: String,
    /// Member ids in the order the board returns them.
    pub member_ids: Vec<String>,
    pub labels: Vec<BoardLabel>,
}

impl BoardCard {
    /// Whether any attached label has the given colour.
    pub fn has_label_color(&self, color: &LabelColor) -> bool {
        self.labels.iter().any(|label| label.color.as_ref() == Some(color))
    }

    /// Member ids as developer ids, skipping blank entries.
    pub fn developer_ids(&self) -> impl Iterator<Item = DeveloperId> + '_ {
        self.member_ids.iter().filter_map(|id| DeveloperId::new(id.as_str()))
    }
}

/// Read and write access to the board service.
///
/// Every failure is reported as a [`BoardError`] and ends the current run.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Lists on `board`, in board order.
    async fn list_board_lists(&self, board: &BoardId) -> Result<Vec<BoardList>, BoardError>;

    /// Cards in `list`, in board order.
    async fn list_cards(&self, list: &ListId) -> Result<Vec<BoardCard>, BoardError>;

    /// Creates a list named `name` on `board`.
    async fn create_list(&self, board: &BoardId, name: &str) -> Result<ListId, BoardError>;

    /// Creates a card named `name` in `list` with the given members.
    async fn create_card(
        &self,
        list: &ListId,
        name: &str,
        members: &[DeveloperId],
    ) -> Result<CardId, BoardError>;

    /// Attaches a label of `color` to `card`.
    async fn add_label(&self, card: &CardId, color: &LabelColor) -> Result<(), BoardError>;
}
