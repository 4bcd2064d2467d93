// crates/post-search/src/domain/value_objects/change_action.rs

use serde::{Deserialize, Serialize};

/// Code d'action d'un message de changement (1..=4 sur le fil).
/// Un code inconnu est conservé tel quel : c'est le dispatcher qui le refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ChangeAction {
    Hello,
    Create,
    Update,
    Delete,
    Unknown(i32),
}

impl ChangeAction {
    pub fn code(&self) -> i32 {
        match self {
            ChangeAction::Hello => 1,
            ChangeAction::Create => 2,
            ChangeAction::Update => 3,
            ChangeAction::Delete => 4,
            ChangeAction::Unknown(code) => *code,
        }
    }

    pub fn writes_document(&self) -> bool {
        matches!(self, ChangeAction::Create | ChangeAction::Update)
    }
}

impl From<i32> for ChangeAction {
    fn from(code: i32) -> Self {
        match code {
            1 => ChangeAction::Hello,
            2 => ChangeAction::Create,
            3 => ChangeAction::Update,
            4 => ChangeAction::Delete,
            other => ChangeAction::Unknown(other),
        }
    }
}

impl From<ChangeAction> for i32 {
    fn from(action: ChangeAction) -> i32 {
        action.code()
    }
}
