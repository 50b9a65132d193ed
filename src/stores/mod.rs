mod collection;
mod news_store;
mod object_store;
mod position_store;
mod profile_store;
mod registration_store;
mod report_store;
mod user_store;

pub use collection::Collection;
pub use news_store::NewsStore;
pub use object_store::ObjectStore;
pub use position_store::PositionStore;
pub use profile_store::ProfileStore;
pub use registration_store::RegistrationStore;
pub use report_store::ReportStore;
pub use user_store::UserStore;
