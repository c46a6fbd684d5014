//! Admin events screen controller
//!
//! One screen drives the full event lifecycle: the list, a create/update
//! form, single-event lookup for editing, and the registered-students view.

use std::sync::Arc;
use tracing::{debug, info};

use crate::models::event::{Event, EventForm};
use crate::models::registration::Student;
use crate::services::api::ApiClient;
use crate::state::session::SessionStore;
use crate::utils::errors::Result;
use crate::utils::logging;

/// View state for the admin event management screen
pub struct AdminEventsController {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    events: Vec<Event>,
    students: Vec<Student>,
    pub form: EventForm,
    /// Set when the form edits an existing event instead of creating one
    pub edit_id: Option<i64>,
    pub loading: bool,
    pub loading_students: bool,
    pub error: Option<String>,
}

impl AdminEventsController {
    pub fn new(api: Arc<ApiClient>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            events: Vec::new(),
            students: Vec::new(),
            form: EventForm::default(),
            edit_id: None,
            loading: false,
            loading_students: false,
            error: None,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Load the full event list; also the manual retry affordance
    pub async fn load_events(&mut self) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;

        let result = self.api.list_events().await;
        self.loading = false;

        match result {
            Ok(events) => {
                debug!(count = events.len(), "Admin events loaded");
                self.events = events;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Fetch one event and put it into the form for editing
    pub async fn load_event(&mut self, event_id: i64) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;

        let result = self.api.get_event(event_id).await;
        self.loading = false;

        match result {
            Ok(event) => {
                self.form = EventForm::from_event(&event);
                self.edit_id = Some(event.id);
                self.students.clear();
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Load the registered students for an event
    pub async fn load_students(&mut self, event_id: i64) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading_students = true;
        self.error = None;

        let result = self.api.list_event_students(event_id).await;
        self.loading_students = false;

        match result {
            Ok(students) => {
                debug!(event_id = event_id, count = students.len(), "Students loaded");
                self.students = students;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Create or update from the form, then reset it and reload the list.
    /// Form validation failures never reach the network.
    pub async fn submit(&mut self) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.loading = true;
        self.error = None;

        let result = match self.edit_id {
            Some(event_id) => self.api.update_event(event_id, &payload).await,
            None => self.api.create_event(&payload).await,
        };
        self.loading = false;

        match result {
            Ok(event) => {
                let action = if self.edit_id.is_some() { "update" } else { "create" };
                logging::log_event_action(event.id, action, Some(&event.title));
                info!(event_id = event.id, action = action, "Event saved");
                self.reset_form();
                self.load_events().await
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Delete an event, then reload the list
    pub async fn delete(&mut self, event_id: i64) -> Result<()> {
        if let Err(e) = self.session.require() {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        self.error = None;

        let result = self.api.delete_event(event_id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                logging::log_event_action(event_id, "delete", None);
                info!(event_id = event_id, "Event deleted");
                if self.edit_id == Some(event_id) {
                    self.reset_form();
                }
                self.load_events().await
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Clear the form back to create mode
    pub fn reset_form(&mut self) {
        self.form = EventForm::default();
        self.edit_id = None;
        self.students.clear();
    }
}
