//! Student events screen controller
//!
//! Loads the available event list together with the user's registered event
//! ids, merges the registration flag, and drives filtering and registration.
//! The optimistic seat-count updates are pure functions over the loaded
//! list; the controller only sequences gate, guards, request, and apply.

use std::collections::HashSet;
use std::sync::Arc;
use chrono::Local;
use tracing::{debug, info, warn};

use crate::models::event::AvailableEvent;
use crate::models::filter::{distinct_categories, filter_events, FilterCriteria};
use crate::services::api::ApiClient;
use crate::state::session::SessionStore;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Result of a register action as the view needs to distinguish it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The server accepted the registration
    Registered,
    /// The server reported an existing registration; local state was synced
    AlreadyRegistered,
    /// Guarded off locally: unknown id, already registered, full, or a
    /// request for this event is still pending. No network call was made.
    Suppressed,
}

/// Mark the event registered and consume one seat, floored at zero
pub fn apply_registration_success(events: &mut [AvailableEvent], event_id: i64) {
    for event in events.iter_mut().filter(|e| e.id == event_id) {
        event.is_registered = true;
        event.remaining_seats = (event.remaining_seats - 1).max(0);
    }
}

/// Mark the event registered without touching the seat count; used when the
/// server reports the registration already existed, so no seat was consumed
/// by this call
pub fn apply_already_registered(events: &mut [AvailableEvent], event_id: i64) {
    for event in events.iter_mut().filter(|e| e.id == event_id) {
        event.is_registered = true;
    }
}

/// Merge the registered-event ids into the freshly loaded list
pub fn merge_registered_flags(
    mut events: Vec<AvailableEvent>,
    registered_ids: &[i64],
) -> Vec<AvailableEvent> {
    for event in events.iter_mut() {
        event.is_registered = registered_ids.contains(&event.id);
    }
    events
}

/// View state for the student event list
pub struct StudentEventsController {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    events: Vec<AvailableEvent>,
    pub criteria: FilterCriteria,
    pending: HashSet<i64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StudentEventsController {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            events: Vec::new(),
            criteria: FilterCriteria::default(),
            pending: HashSet::new(),
            loading: false,
            error: None,
        }
    }

    /// Load available events and my registered event ids concurrently, then
    /// merge the registration flag. Also the manual retry affordance.
    pub async fn load(&mut self) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;

        let result = futures::future::try_join(
            self.api.list_available_events(),
            self.api.my_registered_event_ids(),
        )
        .await;
        self.loading = false;

        match result {
            Ok((events, registered_ids)) => {
                self.events = merge_registered_flags(events, &registered_ids);
                debug!(count = self.events.len(), "Student events loaded");
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Full loaded set, unfiltered
    pub fn events(&self) -> &[AvailableEvent] {
        &self.events
    }

    /// The displayed subset under the current criteria
    pub fn filtered(&self) -> Vec<&AvailableEvent> {
        filter_events(&self.events, &self.criteria, Local::now().date_naive())
    }

    /// Categories for the selector, derived from the loaded set
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.events)
    }

    /// Reset all filter criteria
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Whether a register request for `event_id` is still in flight
    pub fn is_pending(&self, event_id: i64) -> bool {
        self.pending.contains(&event_id)
    }

    /// Register for an event.
    ///
    /// Local guards run first and suppress the call entirely: no session,
    /// unknown event, already registered, no seats left, or a request for
    /// this event still pending. An "already registered" rejection from the
    /// server is treated as idempotent success for the flag only.
    pub async fn register(&mut self, event_id: i64) -> Result<RegisterOutcome> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        let guard_ok = self
            .events
            .iter()
            .find(|e| e.id == event_id)
            .map_or(false, |e| !e.is_registered && !e.is_full());
        if !guard_ok {
            debug!(event_id = event_id, "Register suppressed by local guard");
            return Ok(RegisterOutcome::Suppressed);
        }

        if !self.pending.insert(event_id) {
            debug!(event_id = event_id, "Register ignored: request already pending");
            return Ok(RegisterOutcome::Suppressed);
        }

        self.error = None;
        let result = self.api.register_for_event(event_id).await;
        self.pending.remove(&event_id);

        match result {
            Ok(()) => {
                apply_registration_success(&mut self.events, event_id);
                logging::log_event_action(event_id, "register", None);
                info!(event_id = event_id, "Registered for event");
                Ok(RegisterOutcome::Registered)
            }
            Err(e) if e.is_already_registered() => {
                apply_already_registered(&mut self.events, event_id);
                warn!(event_id = event_id, "Server reports existing registration, state synced");
                Ok(RegisterOutcome::AlreadyRegistered)
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }
}
