// Shared helpers for the integration suite

#![allow(dead_code)]

use std::sync::Arc;

use sce_portal_data::config::PortalConfig;
use sce_portal_data::storage::MemoryStore;
use sce_portal_data::types::{
    Classification, ContainmentClass, DisruptionClass, NewSceObject, RiskClass, User,
};
use sce_portal_data::{AppData, RegisterOutcome};

pub const SUPER_ADMIN_EMAIL: &str = "overseer@sce-foundation.net";
pub const ADMIN_PASSWORD: &str = "correct horse battery";

pub fn test_config() -> PortalConfig {
    PortalConfig {
        super_admin_email: SUPER_ADMIN_EMAIL.to_string(),
        min_password_length: 8,
        data_dir: None,
    }
}

/// Creates an empty portal backed by a shared in-memory store.
pub fn setup_app() -> (Arc<MemoryStore>, AppData) {
    let kv = Arc::new(MemoryStore::new());
    let app = AppData::init(test_config(), kv.clone()).expect("init app data");
    (kv, app)
}

/// Registers the first-ever account, which authenticates as administrator.
pub fn register_admin(app: &mut AppData) -> User {
    match app
        .register("first@x.com", "overseer", ADMIN_PASSWORD)
        .expect("register first account")
    {
        RegisterOutcome::Authenticated(user) => user,
        RegisterOutcome::PendingApproval => panic!("first account must authenticate immediately"),
    }
}

/// A plausible catalog entry draft authored by `author`.
pub fn object_draft(author: &User) -> NewSceObject {
    NewSceObject {
        number: "SCE-173".to_string(),
        name: "Скульптура".to_string(),
        classification: Classification::Euclid,
        containment_class: ContainmentClass::Euclid,
        disruption_class: DisruptionClass::Vlam,
        risk_class: RiskClass::Danger,
        description: "Animate concrete statue.".to_string(),
        special_containment_procedures: "Keep under direct observation.".to_string(),
        author: author.clone(),
    }
}
