//! In-memory board used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rotation::{
    BoardCard, BoardError, BoardId, BoardLabel, BoardList, BoardService, CardId, DeveloperId,
    LabelColor, ListId,
};

/// Every call the fake received, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListBoardLists(String),
    ListCards(String),
    CreateList { board: String, name: String },
    CreateCard { list: String, name: String, members: Vec<String> },
    AddLabel { card: String, color: String },
}

/// A card to seed into a [`FakeBoard`] list.
pub struct CardFixture {
    name: String,
    members: Vec<String>,
    colors: Vec<String>,
}

pub fn card(name: &str, members: &[&str]) -> CardFixture {
    CardFixture {
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        colors: Vec::new(),
    }
}

impl CardFixture {
    pub fn labelled(mut self, colors: &[&str]) -> Self {
        self.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }
}

#[derive(Default)]
pub struct FakeBoard {
    lists: Vec<BoardList>,
    cards: HashMap<ListId, Vec<BoardCard>>,
    calls: Mutex<Vec<Call>>,
    /// Fail the n-th `create_card` call (0-based).
    fail_create_card_at: Option<usize>,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a list holding `cards`, in order.
    pub fn with_list(mut self, name: &str, cards: Vec<CardFixture>) -> Self {
        let list_id = ListId::new(format!("list-{}", self.lists.len())).unwrap();
        let cards = cards
            .into_iter()
            .enumerate()
            .map(|(i, fixture)| BoardCard {
                id: CardId::new(format!("{list_id}-card-{i}")).unwrap(),
                name: fixture.name,
                description: String::new(),
                member_ids: fixture.members,
                labels: fixture
                    .colors
                    .iter()
                    .map(|c| BoardLabel {
                        id: format!("label-{c}"),
                        color: LabelColor::new(c.as_str()),
                    })
                    .collect(),
            })
            .collect();
        self.lists.push(BoardList {
            id: list_id.clone(),
            name: name.to_string(),
        });
        self.cards.insert(list_id, cards);
        self
    }

    /// Adds a list whose cards cannot be fetched.
    pub fn with_unreachable_list(mut self, name: &str) -> Self {
        let list_id = ListId::new(format!("list-{}", self.lists.len())).unwrap();
        self.lists.push(BoardList {
            id: list_id,
            name: name.to_string(),
        });
        self
    }

    pub fn failing_create_card_at(mut self, index: usize) -> Self {
        self.fail_create_card_at = Some(index);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::ListBoardLists(_) | Call::ListCards(_)))
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BoardService for FakeBoard {
    async fn list_board_lists(&self, board: &BoardId) -> Result<Vec<BoardList>, BoardError> {
        self.record(Call::ListBoardLists(board.to_string()));
        Ok(self.lists.clone())
    }

    async fn list_cards(&self, list: &ListId) -> Result<Vec<BoardCard>, BoardError> {
        self.record(Call::ListCards(list.to_string()));
        self.cards.get(list).cloned().ok_or(BoardError::Status {
            status: 404,
            body: format!("no list {list}"),
        })
    }

    async fn create_list(&self, board: &BoardId, name: &str) -> Result<ListId, BoardError> {
        self.record(Call::CreateList {
            board: board.to_string(),
            name: name.to_string(),
        });
        Ok(ListId::new("new-list").unwrap())
    }

    async fn create_card(
        &self,
        list: &ListId,
        name: &str,
        members: &[DeveloperId],
    ) -> Result<CardId, BoardError> {
        let created = self
            .calls()
            .iter()
            .filter(|c| matches!(c, Call::CreateCard { .. }))
            .count();
        if self.fail_create_card_at == Some(created) {
            return Err(BoardError::Transport {
                message: "connection reset".to_string(),
            });
        }
        self.record(Call::CreateCard {
            list: list.to_string(),
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        });
        Ok(CardId::new(format!("card-{name}")).unwrap())
    }

    async fn add_label(&self, card: &CardId, color: &LabelColor) -> Result<(), BoardError> {
        self.record(Call::AddLabel {
            card: card.to_string(),
            color: color.to_string(),
        });
        Ok(())
    }
}
