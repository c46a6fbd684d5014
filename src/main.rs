//! EventDesk client
//!
//! Main application entry point: a small smoke flow that logs in with
//! credentials from the environment, follows the issued role's route, and
//! logs a summary of the loaded events.

use std::sync::Arc;
use anyhow::Context;
use tracing::{info, warn};

use EventDesk::{
    config::Settings,
    controllers::{
        AdminEventsController, LoginController, MyRegistrationsController, Route,
        StudentEventsController,
    },
    services::ApiClient,
    state::SessionStore,
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        eprintln!("Falling back to default settings: {}", e);
        Settings::default()
    });
    settings.validate()?;

    // Initialize logging
    logging::init_logging(&settings.logging)?;

    info!("Starting {}...", EventDesk::info());

    // Session store, restoring any persisted token/role pair
    let session = Arc::new(SessionStore::open(&settings.session).await?);
    session.on_invalidate(|| {
        warn!("Session expired, returning to login");
    });

    // HTTP collaborator
    let api = Arc::new(ApiClient::new(&settings.api, session.clone())?);

    let route = if session.is_authenticated() {
        let role = session.role().context("authenticated session has no role")?;
        info!(role = %role, "Reusing persisted session");
        Route::for_role(role)
    } else {
        let email = std::env::var("EVENTDESK_EMAIL")
            .context("EVENTDESK_EMAIL is not set and no session is persisted")?;
        let password = std::env::var("EVENTDESK_PASSWORD")
            .context("EVENTDESK_PASSWORD is not set and no session is persisted")?;

        let mut login = LoginController::new(api.clone(), session.clone());
        login.email = email;
        login.password = password;
        login.login().await.context("login failed")?
    };

    match route {
        Route::AdminEvents => {
            let mut controller = AdminEventsController::new(api, session);
            controller.load_events().await.context("failed to load events")?;
            info!(count = controller.events().len(), "Loaded admin event list");
            for event in controller.events() {
                info!(
                    event_id = event.id,
                    title = %event.title,
                    venue = %event.venue,
                    capacity = event.max_capacity,
                    date = %helpers::format_event_date(event.date_time),
                    "Event"
                );
            }
        }
        Route::StudentEvents => {
            let mut controller = StudentEventsController::new(api.clone(), session.clone());
            controller.load().await.context("failed to load events")?;
            info!(count = controller.events().len(), "Loaded available events");
            for event in controller.filtered() {
                info!(
                    event_id = event.id,
                    title = %event.title,
                    seats_left = event.remaining_seats,
                    registered = event.is_registered,
                    date = %helpers::format_event_date(event.date_time),
                    "Event"
                );
            }

            let mut registrations = MyRegistrationsController::new(api, session);
            registrations.load().await.context("failed to load registrations")?;
            info!(count = registrations.registrations().len(), "Loaded my registrations");
        }
        _ => {}
    }

    info!("Done.");
    Ok(())
}
