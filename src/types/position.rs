use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::Record;

/// Staff position in the organisation directory
///
/// Independent lookup entity. Profiles store a copy of the position name,
/// not a foreign key; renaming a position does not rewrite profiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub name: String,
    pub description: String,
    pub clearance_level: u8,
}

impl Record for Position {
    const STORE_KEY: &'static str = keys::POSITIONS;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new position; the store assigns the id.
#[derive(Clone, Debug)]
pub struct NewPosition {
    pub name: String,
    pub description: String,
    pub clearance_level: u8,
}

/// Editable position fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct PositionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub clearance_level: Option<u8>,
}

impl PositionPatch {
    pub(crate) fn apply(self, position: &mut Position) {
        if let Some(name) = self.name {
            position.name = name;
        }
        if let Some(description) = self.description {
            position.description = description;
        }
        if let Some(clearance_level) = self.clearance_level {
            position.clearance_level = clearance_level;
        }
    }
}
