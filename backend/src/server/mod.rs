//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::activities::list_activities;
use crate::inbound::http::analytics::list_analytics;
use crate::inbound::http::dashboard::dashboard_summary;
use crate::inbound::http::departments::{get_department, list_departments};
use crate::inbound::http::employees::{get_employee, list_employees};
use crate::inbound::http::error::json_error_handler;
use crate::inbound::http::health::{live, ready, HealthState};
use crate::inbound::http::recommendations::{complete_recommendation, list_recommendations};
use crate::inbound::http::technologies::{get_technology, list_technologies};
use crate::inbound::http::waitlist::{join_waitlist, list_waitlist_subscribers};
use crate::middleware::RequestId;
use crate::storage::MemoryStore;

/// Assemble the application: shared state, middleware, and every route.
///
/// Exposed so integration tests can drive the exact production wiring
/// against an isolated [`MemoryStore`].
pub fn build_app(
    store: web::Data<MemoryStore>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(join_waitlist)
        .service(list_waitlist_subscribers)
        .service(list_departments)
        .service(get_department)
        .service(list_technologies)
        .service(get_technology)
        .service(list_employees)
        .service(get_employee)
        .service(list_activities)
        .service(list_recommendations)
        .service(complete_recommendation)
        .service(list_analytics)
        .service(dashboard_summary);

    let app = App::new()
        .app_data(store)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(RequestId)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind and spawn the HTTP server, flipping the readiness probe on success.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    store: MemoryStore,
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        build_app(store.clone(), server_health_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
