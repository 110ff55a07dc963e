use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::extractors::AuthUser,
    checkout::dto::{CheckoutRequest, CheckoutResponse},
    courses::repo::Course,
    error::{ApiError, ApiJson},
    payments::CreateCheckoutSession,
    state::AppState,
};

pub fn checkout_routes() -> Router<AppState> {
    Router::new().route("/checkout", post(create_checkout_session))
}

/// Creates a payment-provider checkout session for one course at the
/// configured fixed price. `user_id`/`course_id` ride along as session
/// metadata so a later reconciliation step can tie the payment back to the
/// purchase; reconciliation itself lives outside this service.
#[instrument(skip(state, payload))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(payload): ApiJson<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let course = Course::find_by_id(&state.db, payload.course_id)
        .await?
        .ok_or_else(|| {
            warn!(course_id = %payload.course_id, "checkout for unknown course");
            ApiError::NotFound("Course not found.".into())
        })?;

    let stripe = &state.config.stripe;
    let session = state
        .payments
        .create_checkout_session(CreateCheckoutSession {
            product_name: course.title,
            product_description: course.description,
            product_image: course.image_url,
            currency: stripe.currency.clone(),
            unit_amount: stripe.unit_amount,
            success_url: stripe.success_url.clone(),
            cancel_url: stripe.cancel_url.clone(),
            user_id,
            course_id: course.id,
        })
        .await
        .map_err(|e| {
            error!(error = %e, course_id = %payload.course_id, "checkout session failed");
            ApiError::Upstream(e.to_string())
        })?;

    info!(session_id = %session.id, %user_id, course_id = %payload.course_id, "checkout session created");
    Ok(Json(CheckoutResponse { id: session.id }))
}
