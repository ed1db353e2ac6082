//! Trello JSON shapes and their conversion into board port types.

use rotation::{BoardCard, BoardError, BoardLabel, BoardList, CardId, LabelColor, ListId};
use serde::Deserialize;

/// Subset of the Trello list object.
#[derive(Debug, Deserialize)]
pub(crate) struct TrelloList {
    pub id: String,
    pub name: String,
}

/// Subset of the Trello card object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrelloCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub id_members: Vec<String>,
    #[serde(default)]
    pub labels: Vec<TrelloLabel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrelloLabel {
    pub id: String,
    /// Trello sends `null` for colourless labels.
    #[serde(default)]
    pub color: Option<String>,
}

/// Any Trello object where only the id matters.
#[derive(Debug, Deserialize)]
pub(crate) struct Created {
    pub id: String,
}

fn missing_id(kind: &str) -> BoardError {
    BoardError::InvalidResponse {
        message: format!("{kind} without an id"),
    }
}

impl TryFrom<TrelloList> for BoardList {
    type Error = BoardError;

    fn try_from(list: TrelloList) -> Result<Self, Self::Error> {
        Ok(BoardList {
            id: ListId::new(list.id).ok_or_else(|| missing_id("list"))?,
            name: list.name,
        })
    }
}

impl TryFrom<TrelloCard> for BoardCard {
    type Error = BoardError;

    fn try_from(card: TrelloCard) -> Result<Self, Self::Error> {
        Ok(BoardCard {
            id: CardId::new(card.id).ok_or_else(|| missing_id("card"))?,
            name: card.name,
            description: card.desc,
            member_ids: card.id_members,
            labels: card
                .labels
                .into_iter()
                .map(|label| BoardLabel {
                    id: label.id,
                    color: label.color.and_then(LabelColor::new),
                })
                .collect(),
        })
    }
}

pub(crate) fn created_list_id(created: Created) -> Result<ListId, BoardError> {
    ListId::new(created.id).ok_or_else(|| missing_id("created list"))
}

pub(crate) fn created_card_id(created: Created) -> Result<CardId, BoardError> {
    CardId::new(created.id).ok_or_else(|| missing_id("created card"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_json_maps_onto_board_card() {
        let json = r#"{
            "id": "c1",
            "name": "alpha",
            "desc": "pairing notes",
            "idMembers": ["d1", "d2"],
            "labels": [
                {"id": "l1", "color": "orange", "name": ""},
                {"id": "l2", "color": null, "name": "misc"}
            ],
            "closed": false
        }"#;
        let card: BoardCard = serde_json::from_str::<TrelloCard>(json)
            .unwrap()
            .try_into()
            .unwrap();
        assert_eq!(card.id.as_str(), "c1");
        assert_eq!(card.description, "pairing notes");
        assert_eq!(card.member_ids, vec!["d1", "d2"]);
        assert_eq!(card.labels[0].color, LabelColor::new("orange"));
        assert_eq!(card.labels[1].color, None);
    }

    #[test]
    fn sparse_card_json_uses_defaults() {
        let card: BoardCard = serde_json::from_str::<TrelloCard>(r#"{"id":"c1","name":"devs"}"#)
            .unwrap()
            .try_into()
            .unwrap();
        assert!(card.member_ids.is_empty());
        assert!(card.labels.is_empty());
        assert!(card.description.is_empty());
    }

    #[test]
    fn empty_ids_are_rejected() {
        let list = TrelloList {
            id: String::new(),
            name: "devs".to_string(),
        };
        assert!(matches!(
            BoardList::try_from(list),
            Err(BoardError::InvalidResponse { .. })
        ));
    }
}
