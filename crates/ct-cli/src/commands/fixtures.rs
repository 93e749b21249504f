//! Board export shared by command tests.
//!
//! - `card-1` created in Todo at 09:00, moved to Doing at 09:30 and back to
//!   Todo at 11:30; alice assigned at 09:00, bob from 09:15 to 10:15
//! - `card-2` copied from `card-1`, `card-4` copied from `card-2`
//! - `card-5` copied from a card on another board
//! - `card-3` has only a comment

use ct_core::Classifier;

use crate::export::{BoardExport, ExportSource};

pub const BOARD_EXPORT: &str = r#"{
    "id": "board-1",
    "name": "Team",
    "cards": [
        {"id": "card-1", "name": "Fix login", "idList": "list-1"},
        {"id": "card-2", "name": "Fix login again", "idList": "list-1"},
        {"id": "card-3", "name": "Notes", "idList": "list-1"},
        {"id": "card-4", "name": "Fix login forever", "idList": "list-1"},
        {"id": "card-5", "name": "Imported", "idList": "list-1"}
    ],
    "actions": [
        {
            "id": "a01", "type": "createCard", "date": "2024-03-01T09:00:00Z",
            "idMemberCreator": "alice",
            "data": {"card": {"id": "card-1"}, "list": {"id": "list-1", "name": "Todo"}}
        },
        {
            "id": "a02", "type": "addMemberToCard", "date": "2024-03-01T09:00:00Z",
            "member": {"id": "alice", "fullName": "Alice"},
            "data": {"card": {"id": "card-1"}}
        },
        {
            "id": "a03", "type": "addMemberToCard", "date": "2024-03-01T09:15:00Z",
            "member": {"id": "bob", "fullName": "Bob"},
            "data": {"card": {"id": "card-1"}}
        },
        {
            "id": "a04", "type": "updateCard", "date": "2024-03-01T09:30:00Z",
            "data": {
                "card": {"id": "card-1"},
                "listBefore": {"id": "list-1", "name": "Todo"},
                "listAfter": {"id": "list-2", "name": "Doing"}
            }
        },
        {
            "id": "a05", "type": "removeMemberFromCard", "date": "2024-03-01T10:15:00Z",
            "member": {"id": "bob", "fullName": "Bob"},
            "data": {"card": {"id": "card-1"}}
        },
        {
            "id": "a06", "type": "commentCard", "date": "2024-03-01T10:20:00Z",
            "data": {"card": {"id": "card-3"}, "text": "remember the milk"}
        },
        {
            "id": "a07", "type": "copyCard", "date": "2024-03-01T11:00:00Z",
            "idMemberCreator": "bob",
            "data": {
                "card": {"id": "card-2"},
                "cardSource": {"id": "card-1"},
                "list": {"id": "list-1", "name": "Todo"}
            }
        },
        {
            "id": "a08", "type": "copyCard", "date": "2024-03-01T11:15:00Z",
            "data": {
                "card": {"id": "card-4"},
                "cardSource": {"id": "card-2"},
                "list": {"id": "list-1", "name": "Todo"}
            }
        },
        {
            "id": "a09", "type": "copyCard", "date": "2024-03-01T11:20:00Z",
            "data": {
                "card": {"id": "card-5"},
                "cardSource": {"id": "card-elsewhere"},
                "list": {"id": "list-1", "name": "Todo"}
            }
        },
        {
            "id": "a10", "type": "updateCard", "date": "2024-03-01T11:30:00Z",
            "data": {
                "card": {"id": "card-1"},
                "listBefore": {"id": "list-2", "name": "Doing"},
                "listAfter": {"id": "list-1", "name": "Todo"}
            }
        }
    ]
}"#;

pub fn source() -> ExportSource {
    let export: BoardExport = serde_json::from_str(BOARD_EXPORT).unwrap();
    ExportSource::new(export, Classifier::default())
}
