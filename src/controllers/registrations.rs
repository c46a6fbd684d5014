//! My-registrations screen controller

use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::registration::Registration;
use crate::services::api::ApiClient;
use crate::state::session::SessionStore;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Result of an unregister action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnregisterOutcome {
    Unregistered,
    /// A request for this registration is still pending; no call was made
    Suppressed,
}

/// View state for the student's own registrations
pub struct MyRegistrationsController {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    registrations: Vec<Registration>,
    pending: HashSet<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl MyRegistrationsController {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            registrations: Vec::new(),
            pending: HashSet::new(),
            loading: false,
            error: None,
        }
    }

    /// Load my registrations; also the manual retry affordance
    pub async fn load(&mut self) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;

        let result = self.api.my_registrations().await;
        self.loading = false;

        match result {
            Ok(registrations) => {
                debug!(count = registrations.len(), "Registrations loaded");
                self.registrations = registrations;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Whether an unregister request for `registration_id` is in flight
    pub fn is_pending(&self, registration_id: i64) -> bool {
        self.pending.contains(&registration_id)
    }

    /// Unregister by registration id. On success the entry leaves the local
    /// list; seat counts are not modeled in this view.
    pub async fn unregister(&mut self, registration_id: i64) -> Result<UnregisterOutcome> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        if !self.pending.insert(registration_id) {
            debug!(registration_id = registration_id, "Unregister ignored: request already pending");
            return Ok(UnregisterOutcome::Suppressed);
        }

        self.error = None;
        let result = self.api.unregister(registration_id).await;
        self.pending.remove(&registration_id);

        match result {
            Ok(()) => {
                self.registrations.retain(|r| r.id != registration_id);
                logging::log_user_action("unregister", None);
                info!(registration_id = registration_id, "Unregistered");
                Ok(UnregisterOutcome::Unregistered)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
