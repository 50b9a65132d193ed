use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::keys;
use crate::types::{Record, User};

/// Object class in the SCE catalog taxonomy
///
/// The four class axes are independent descriptive tags; there are no
/// cross-validation rules between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Safe,
    Euclid,
    Keter,
    Thaumiel,
    Neutralized,
    Apollyon,
    Archon,
    Unclassified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainmentClass {
    Safe,
    Euclid,
    Keter,
    Neutralized,
    Pending,
    Explained,
    Esoteric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisruptionClass {
    Dark,
    Vlam,
    Keneq,
    Ekhi,
    Amida,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskClass {
    Notice,
    Caution,
    Warning,
    Danger,
    Critical,
}

/// Catalogued anomalous object entry
///
/// `author` is a snapshot of the creating account, not a live reference:
/// later username or role edits do not rewrite existing bylines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceObject {
    pub id: String,
    /// Human-chosen catalog code (e.g. "SCE-173"); not enforced unique.
    pub number: String,
    pub name: String,
    pub classification: Classification,
    pub containment_class: ContainmentClass,
    pub disruption_class: DisruptionClass,
    pub risk_class: RiskClass,
    pub description: String,
    pub special_containment_procedures: String,
    pub author: User,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for SceObject {
    const STORE_KEY: &'static str = keys::OBJECTS;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Draft for a new catalog entry; system fields are assigned by the store.
#[derive(Clone, Debug)]
pub struct NewSceObject {
    pub number: String,
    pub name: String,
    pub classification: Classification,
    pub containment_class: ContainmentClass,
    pub disruption_class: DisruptionClass,
    pub risk_class: RiskClass,
    pub description: String,
    pub special_containment_procedures: String,
    pub author: User,
}

/// Editable catalog entry fields; `None` leaves a field unchanged.
#[derive(Clone, Debug, Default)]
pub struct SceObjectPatch {
    pub number: Option<String>,
    pub name: Option<String>,
    pub classification: Option<Classification>,
    pub containment_class: Option<ContainmentClass>,
    pub disruption_class: Option<DisruptionClass>,
    pub risk_class: Option<RiskClass>,
    pub description: Option<String>,
    pub special_containment_procedures: Option<String>,
}

impl SceObjectPatch {
    pub(crate) fn apply(self, object: &mut SceObject) {
        if let Some(number) = self.number {
            object.number = number;
        }
        if let Some(name) = self.name {
            object.name = name;
        }
        if let Some(classification) = self.classification {
            object.classification = classification;
        }
        if let Some(containment_class) = self.containment_class {
            object.containment_class = containment_class;
        }
        if let Some(disruption_class) = self.disruption_class {
            object.disruption_class = disruption_class;
        }
        if let Some(risk_class) = self.risk_class {
            object.risk_class = risk_class;
        }
        if let Some(description) = self.description {
            object.description = description;
        }
        if let Some(procedures) = self.special_containment_procedures {
            object.special_containment_procedures = procedures;
        }
    }
}
