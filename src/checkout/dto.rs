use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for checkout-session creation.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub course_id: Uuid,
}

/// The provider's opaque session identifier, echoed to the client so it can
/// redirect into the hosted payment page.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub id: String,
}
