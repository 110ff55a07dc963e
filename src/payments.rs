use anyhow::Context;
use axum::async_trait;
use serde::Deserialize;
use tracing::{debug, error};
use uuid::Uuid;

/// One checkout attempt for a single course, priced in the currency's
/// smallest unit. `user_id`/`course_id` travel as opaque session metadata so
/// a completed payment can later be tied back to a purchase.
#[derive(Debug, Clone)]
pub struct CreateCheckoutSession {
    pub product_name: String,
    pub product_description: Option<String>,
    pub product_image: Option<String>,
    pub currency: String,
    pub unit_amount: i64,
    pub success_url: String,
    pub cancel_url: String,
    pub user_id: Uuid,
    pub course_id: Uuid,
}

/// Provider's opaque transaction handle.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: Option<String>,
}

#[async_trait]
pub trait PaymentClient: Send + Sync {
    async fn create_checkout_session(
        &self,
        req: CreateCheckoutSession,
    ) -> anyhow::Result<CheckoutSession>;
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: StripeErrorDetail,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// Thin client for Stripe's Checkout Sessions REST endpoint.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeClient {
    pub fn new(secret_key: &str, api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key: secret_key.to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PaymentClient for StripeClient {
    async fn create_checkout_session(
        &self,
        req: CreateCheckoutSession,
    ) -> anyhow::Result<CheckoutSession> {
        let mut form: Vec<(String, String)> = vec![
            ("payment_method_types[0]".into(), "card".into()),
            ("mode".into(), "payment".into()),
            ("success_url".into(), req.success_url),
            ("cancel_url".into(), req.cancel_url),
            (
                "line_items[0][price_data][currency]".into(),
                req.currency,
            ),
            (
                "line_items[0][price_data][unit_amount]".into(),
                req.unit_amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".into(),
                req.product_name,
            ),
            ("line_items[0][quantity]".into(), "1".into()),
            ("metadata[user_id]".into(), req.user_id.to_string()),
            ("metadata[course_id]".into(), req.course_id.to_string()),
        ];
        if let Some(description) = req.product_description {
            form.push((
                "line_items[0][price_data][product_data][description]".into(),
                description,
            ));
        }
        if let Some(image) = req.product_image {
            form.push((
                "line_items[0][price_data][product_data][images][0]".into(),
                image,
            ));
        }

        let res = self
            .http
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .basic_auth(&self.secret_key, None::<&str>)
            .form(&form)
            .send()
            .await
            .context("stripe checkout session request")?;

        let status = res.status();
        if !status.is_success() {
            let message = res
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error.message)
                .unwrap_or_else(|| format!("stripe returned {}", status));
            error!(%status, %message, "stripe checkout session failed");
            anyhow::bail!(message);
        }

        let session: CheckoutSession = res
            .json()
            .await
            .context("decode stripe checkout session")?;
        debug!(session_id = %session.id, "stripe checkout session created");
        Ok(session)
    }
}
