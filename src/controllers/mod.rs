//! View controllers module
//!
//! One controller per screen. Each holds form fields, loaded entity lists,
//! and busy/error flags, and synchronizes with the registration API through
//! the injected `ApiClient` and `SessionStore`.

pub mod login;
pub mod signup;
pub mod admin_events;
pub mod student_events;
pub mod registrations;

// Re-export commonly used controllers
pub use login::LoginController;
pub use signup::SignupController;
pub use admin_events::AdminEventsController;
pub use student_events::{StudentEventsController, RegisterOutcome};
pub use registrations::{MyRegistrationsController, UnregisterOutcome};

use crate::models::session::Role;

/// Navigation targets of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated entry point
    Login,
    Signup,
    StudentEvents,
    MyRegistrations,
    AdminEvents,
}

impl Route {
    /// Post-login destination for a role
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Route::AdminEvents,
            Role::Student => Route::StudentEvents,
        }
    }

    /// Role guard: whether a session with `role` may enter this route.
    /// Unauthenticated users only reach the entry points.
    pub fn allows(&self, role: Option<Role>) -> bool {
        match self {
            Route::Login | Route::Signup => true,
            Route::StudentEvents | Route::MyRegistrations => role == Some(Role::Student),
            Route::AdminEvents => role == Some(Role::Admin),
        }
    }
}
