use std::sync::Arc;

use crate::config::PortalConfig;
use crate::errors::{AuthError, DataError};
use crate::providers::{CryptoProvider, PasswordValidator};
use crate::session::SessionManager;
use crate::storage::KeyValueStore;
use crate::stores::{
    NewsStore, ObjectStore, PositionStore, ProfileStore, RegistrationStore, ReportStore, UserStore,
};
use crate::types::{
    NewNews, NewPosition, NewReport, NewSceObject, NewUser, NewUserProfile, News, NewsPatch,
    Position, PositionPatch, RegistrationRequest, RegistrationStatus, Report, ReportPatch,
    SceObject, SceObjectPatch, User, UserPatch, UserProfile, UserProfilePatch, UserRole,
};

/// Outcome of a registration attempt
///
/// A pending outcome means "awaiting approval"; it is not an error.
#[derive(Clone, Debug)]
pub enum RegisterOutcome {
    /// First account ever, or the designated super-admin address: an
    /// administrator account was created and logged in immediately.
    Authenticated(User),
    /// A moderation request was filed; no session was established.
    PendingApproval,
}

/// Centralized application data following the main-owned stores pattern
///
/// Every collection is loaded once at init and shared through this facade;
/// presentation code never touches the key-value store directly. Cross-entity
/// workflows (registration approval, account deletion cascades, profile
/// back-links) live here. Role checks remain advisory: the facade exposes
/// [`AppData::is_admin`] but does not gate operations itself, matching the
/// portal's UI-level authorization model.
pub struct AppData {
    config: PortalConfig,
    crypto: CryptoProvider,
    password_validator: PasswordValidator,
    users: UserStore,
    objects: ObjectStore,
    news: NewsStore,
    reports: ReportStore,
    positions: PositionStore,
    registrations: RegistrationStore,
    profiles: ProfileStore,
    session: SessionManager,
}

impl AppData {
    /// Load every collection and restore the persisted session
    ///
    /// # Errors
    /// Returns `DataError::Storage` when a collection document cannot be read
    /// or parsed.
    pub fn init(config: PortalConfig, kv: Arc<dyn KeyValueStore>) -> Result<Self, DataError> {
        tracing::info!("initializing portal data");
        let users = UserStore::load(kv.clone())?;
        let objects = ObjectStore::load(kv.clone())?;
        let news = NewsStore::load(kv.clone())?;
        let reports = ReportStore::load(kv.clone())?;
        let positions = PositionStore::load(kv.clone())?;
        let registrations = RegistrationStore::load(kv.clone())?;
        let profiles = ProfileStore::load(kv.clone())?;
        let session = SessionManager::restore(kv)?;
        tracing::debug!(
            users = users.count(),
            objects = objects.list().len(),
            "collections loaded"
        );

        let password_validator = PasswordValidator::new(config.min_password_length);
        Ok(Self {
            config,
            crypto: CryptoProvider::new(),
            password_validator,
            users,
            objects,
            news,
            reports,
            positions,
            registrations,
            profiles,
            session,
        })
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn objects(&self) -> &[SceObject] {
        self.objects.list()
    }

    pub fn object(&self, id: &str) -> Option<&SceObject> {
        self.objects.get(id)
    }

    pub fn news(&self) -> &[News] {
        self.news.list()
    }

    pub fn news_item(&self, id: &str) -> Option<&News> {
        self.news.get(id)
    }

    pub fn reports(&self) -> &[Report] {
        self.reports.list()
    }

    pub fn report(&self, id: &str) -> Option<&Report> {
        self.reports.get(id)
    }

    pub fn positions(&self) -> &[Position] {
        self.positions.list()
    }

    pub fn position(&self, id: &str) -> Option<&Position> {
        self.positions.get(id)
    }

    pub fn registration_requests(&self) -> &[RegistrationRequest] {
        self.registrations.list()
    }

    /// Sanitized views of every account.
    pub fn users(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.users.get(id)
    }

    pub fn user_profiles(&self) -> &[UserProfile] {
        self.profiles.list()
    }

    pub fn user_profile(&self, id: &str) -> Option<&UserProfile> {
        self.profiles.get(id)
    }

    pub fn user_profile_by_user(&self, user_id: &str) -> Option<&UserProfile> {
        self.profiles.find_by_user(user_id)
    }

    // ------------------------------------------------------------------
    // Content CRUD
    // ------------------------------------------------------------------

    pub fn create_object(&mut self, draft: NewSceObject) -> Result<SceObject, DataError> {
        let object = self.objects.create(draft)?;
        tracing::info!(object_id = %object.id, number = %object.number, "catalog entry created");
        Ok(object)
    }

    pub fn update_object(&mut self, id: &str, patch: SceObjectPatch) -> Result<SceObject, DataError> {
        self.objects.update(id, patch)
    }

    pub fn delete_object(&mut self, id: &str) -> Result<(), DataError> {
        Ok(self.objects.delete(id)?)
    }

    pub fn create_news(&mut self, draft: NewNews) -> Result<News, DataError> {
        let news = self.news.create(draft)?;
        tracing::info!(news_id = %news.id, "news item created");
        Ok(news)
    }

    pub fn update_news(&mut self, id: &str, patch: NewsPatch) -> Result<News, DataError> {
        self.news.update(id, patch)
    }

    pub fn delete_news(&mut self, id: &str) -> Result<(), DataError> {
        Ok(self.news.delete(id)?)
    }

    pub fn create_report(&mut self, draft: NewReport) -> Result<Report, DataError> {
        let report = self.reports.create(draft)?;
        tracing::info!(report_id = %report.id, status = ?report.status, "report created");
        Ok(report)
    }

    pub fn update_report(&mut self, id: &str, patch: ReportPatch) -> Result<Report, DataError> {
        self.reports.update(id, patch)
    }

    pub fn delete_report(&mut self, id: &str) -> Result<(), DataError> {
        Ok(self.reports.delete(id)?)
    }

    pub fn create_position(&mut self, draft: NewPosition) -> Result<Position, DataError> {
        Ok(self.positions.create(draft)?)
    }

    pub fn update_position(&mut self, id: &str, patch: PositionPatch) -> Result<Position, DataError> {
        self.positions.update(id, patch)
    }

    pub fn delete_position(&mut self, id: &str) -> Result<(), DataError> {
        Ok(self.positions.delete(id)?)
    }

    // ------------------------------------------------------------------
    // Session & authentication
    // ------------------------------------------------------------------

    pub fn current_user(&self) -> Option<&User> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    /// Authenticate by email and password
    ///
    /// Unknown email and wrong password are reported identically; the
    /// distinction exists only in logs. Non-admin accounts explicitly marked
    /// unapproved are refused with `AccountNotApproved`. Success persists the
    /// sanitized identity as the active session.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, DataError> {
        let Some(record) = self.users.record_by_email(email) else {
            tracing::debug!(email, "login failed: no such account");
            return Err(AuthError::InvalidCredentials.into());
        };
        if !self.crypto.verify_password(&record.password_hash, password) {
            tracing::debug!(email, "login failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }
        if record.role != UserRole::Admin && record.is_approved == Some(false) {
            tracing::debug!(email, "login refused: account awaiting approval");
            return Err(AuthError::AccountNotApproved.into());
        }

        let user = User::from(record);
        self.session.set_identity(user.clone())?;
        tracing::info!(user_id = %user.id, "login succeeded");
        Ok(user)
    }

    /// Register a new account
    ///
    /// The first account ever, or the configured super-admin address, becomes
    /// an administrator (clearance 5, approved) and is logged in immediately.
    /// Everyone else files a PENDING registration request and stays anonymous
    /// until a moderator approves it. An email held by an account or by an
    /// undecided request is a duplicate.
    pub fn register(
        &mut self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<RegisterOutcome, DataError> {
        if self.users.email_taken(email) || self.registrations.has_pending_for(email) {
            return Err(AuthError::DuplicateEmail(email.to_string()).into());
        }
        self.password_validator.validate(password)?;
        let password_hash = self.crypto.hash_password(password)?;

        let first_user = self.users.count() == 0;
        if first_user || email == self.config.super_admin_email {
            let user = self.users.create(NewUser {
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
                role: UserRole::Admin,
                clearance_level: 5,
                is_approved: true,
            })?;
            self.session.set_identity(user.clone())?;
            tracing::info!(user_id = %user.id, first_user, "administrator account registered");
            return Ok(RegisterOutcome::Authenticated(user));
        }

        let request = self
            .registrations
            .create_pending(email, username, &password_hash)?;
        tracing::info!(request_id = %request.id, "registration request filed");
        Ok(RegisterOutcome::PendingApproval)
    }

    /// Drop the active session, if any.
    pub fn logout(&mut self) -> Result<(), DataError> {
        Ok(self.session.clear()?)
    }

    // ------------------------------------------------------------------
    // Cross-entity workflows
    // ------------------------------------------------------------------

    /// Approve a pending registration request
    ///
    /// Creates the account (READER, clearance 1, approved; the password hash
    /// is carried over from the request), creates its profile, back-links the
    /// profile id onto the account and marks the request APPROVED. The writes
    /// are not transactional; on a partial failure the records created so far
    /// are compensated with best-effort deletes so no orphan survives
    /// silently.
    ///
    /// # Errors
    /// `NotFound` for an unknown request id; `RegistrationNotPending` when
    /// the request was already decided.
    pub fn approve_registration(&mut self, request_id: &str) -> Result<User, DataError> {
        let request = self
            .registrations
            .get(request_id)
            .ok_or_else(|| DataError::not_found("registration request", request_id))?
            .clone();
        if request.status != RegistrationStatus::Pending {
            return Err(DataError::RegistrationNotPending {
                id: request.id,
                status: request.status,
            });
        }

        let user = self.users.create(NewUser {
            email: request.email,
            username: request.username,
            password_hash: request.password_hash,
            role: UserRole::Reader,
            clearance_level: 1,
            is_approved: true,
        })?;

        let profile = match self.profiles.create(NewUserProfile::for_user(&user.id)) {
            Ok(profile) => profile,
            Err(error) => {
                tracing::warn!(%error, user_id = %user.id, "profile creation failed; compensating account delete");
                self.compensate_user(&user.id);
                return Err(error.into());
            }
        };

        let user = match self.users.update(
            &user.id,
            UserPatch {
                profile_id: Some(profile.id.clone()),
                ..UserPatch::default()
            },
        ) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, user_id = %user.id, "profile back-link failed; compensating");
                self.compensate_profile(&profile.id);
                self.compensate_user(&user.id);
                return Err(error);
            }
        };

        if let Err(error) = self
            .registrations
            .set_status(request_id, RegistrationStatus::Approved)
        {
            tracing::warn!(%error, request_id, "request status update failed; compensating");
            self.compensate_profile(&profile.id);
            self.compensate_user(&user.id);
            return Err(error);
        }

        tracing::info!(request_id, user_id = %user.id, "registration approved");
        Ok(user)
    }

    /// Reject a registration request; only the status changes.
    pub fn reject_registration(&mut self, request_id: &str) -> Result<(), DataError> {
        self.registrations
            .set_status(request_id, RegistrationStatus::Rejected)?;
        tracing::info!(request_id, "registration rejected");
        Ok(())
    }

    /// Delete an account, cascading to its profile
    ///
    /// Deleting the currently active identity also clears the session.
    /// Deleting an absent id is a no-op.
    pub fn delete_user(&mut self, id: &str) -> Result<(), DataError> {
        self.users.delete(id)?;
        self.profiles.delete_by_user(id)?;
        if self.session.current().map(|u| u.id.as_str()) == Some(id) {
            self.session.clear()?;
            tracing::info!(user_id = id, "active session cleared by account deletion");
        }
        Ok(())
    }

    /// Apply an admin patch to an account
    ///
    /// When the patched account is the active identity, the persisted session
    /// snapshot is refreshed in place so role or clearance edits are visible
    /// without re-login.
    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Result<User, DataError> {
        let user = self.users.update(id, patch)?;
        if self.session.current().map(|u| u.id.as_str()) == Some(id) {
            self.session.set_identity(user.clone())?;
        }
        Ok(user)
    }

    /// Create a profile and back-link it onto the owning account
    ///
    /// Two separate persisted writes, not atomic: a back-link failure leaves
    /// the created profile in place and propagates the error, which keeps the
    /// inconsistency detectable rather than silent.
    pub fn create_user_profile(&mut self, draft: NewUserProfile) -> Result<UserProfile, DataError> {
        let profile = self.profiles.create(draft)?;
        self.update_user(
            &profile.user_id,
            UserPatch {
                profile_id: Some(profile.id.clone()),
                ..UserPatch::default()
            },
        )?;
        Ok(profile)
    }

    /// Shallow-merge a profile patch; `last_active` is refreshed.
    pub fn update_user_profile(
        &mut self,
        id: &str,
        patch: UserProfilePatch,
    ) -> Result<UserProfile, DataError> {
        self.profiles.update(id, patch)
    }

    fn compensate_user(&mut self, id: &str) {
        if let Err(error) = self.users.delete(id) {
            tracing::warn!(%error, user_id = id, "compensating account delete failed; orphan account remains");
        }
    }

    fn compensate_profile(&mut self, id: &str) {
        if let Err(error) = self.profiles.delete(id) {
            tracing::warn!(%error, profile_id = id, "compensating profile delete failed; orphan profile remains");
        }
    }
}
