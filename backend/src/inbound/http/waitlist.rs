//! Waitlist signup endpoints.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::records::{EmailAddress, WaitlistSubscriber};
use crate::inbound::http::error::{ApiError, ErrorBody};
use crate::inbound::http::ApiResult;
use crate::storage::MemoryStore;

/// Request body for `POST /api/waitlist`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WaitlistRequest {
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Join the waitlist.
///
/// Re-submitting a known email answers 201 with the existing subscriber
/// rather than creating a duplicate.
#[utoipa::path(
    post,
    path = "/api/waitlist",
    request_body = WaitlistRequest,
    responses(
        (status = 201, description = "Created or existing subscriber", body = WaitlistSubscriber),
        (status = 400, description = "Invalid email shape", body = ErrorBody)
    ),
    tags = ["waitlist"],
    operation_id = "joinWaitlist"
)]
#[post("/waitlist")]
pub async fn join_waitlist(
    store: web::Data<MemoryStore>,
    payload: web::Json<WaitlistRequest>,
) -> ApiResult<HttpResponse> {
    let email = EmailAddress::new(&payload.email)
        .map_err(|err| ApiError::bad_request(err.to_string()))?;
    let subscriber = store.add_waitlist_subscriber(email);
    Ok(HttpResponse::Created().json(subscriber))
}

/// List waitlist subscribers.
#[utoipa::path(
    get,
    path = "/api/waitlist",
    responses((status = 200, description = "Subscribers", body = [WaitlistSubscriber])),
    tags = ["waitlist"],
    operation_id = "listWaitlistSubscribers"
)]
#[get("/waitlist")]
pub async fn list_waitlist_subscribers(
    store: web::Data<MemoryStore>,
) -> ApiResult<web::Json<Vec<WaitlistSubscriber>>> {
    Ok(web::Json(store.waitlist_subscribers()))
}
