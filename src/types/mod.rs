use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod news;
pub mod object;
pub mod position;
pub mod profile;
pub mod registration;
pub mod report;
pub mod user;

pub use news::{NewNews, News, NewsPatch};
pub use object::{
    Classification, ContainmentClass, DisruptionClass, NewSceObject, RiskClass, SceObject,
    SceObjectPatch,
};
pub use position::{NewPosition, Position, PositionPatch};
pub use profile::{NewUserProfile, UserProfile, UserProfilePatch, NEWCOMER_BADGE};
pub use registration::{RegistrationRequest, RegistrationStatus};
pub use report::{NewReport, Report, ReportPatch, ReportStatus};
pub use user::{NewUser, User, UserPatch, UserRecord, UserRole};

/// A record belonging to one of the persisted collections
///
/// Every record carries an opaque unique string id and knows the reserved
/// store key of its collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Reserved store key of the collection this record lives in.
    const STORE_KEY: &'static str;

    fn id(&self) -> &str;
}
