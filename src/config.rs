use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StripeConfig {
    pub secret_key: String,
    pub api_base: String,
    pub success_url: String,
    pub cancel_url: String,
    pub currency: String,
    /// Course price in the currency's smallest unit (Stripe convention).
    pub unit_amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub stripe: StripeConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "coursehub".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "coursehub-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
            refresh_ttl_minutes: std::env::var("JWT_REFRESH_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 14),
        };
        let stripe = StripeConfig {
            secret_key: std::env::var("STRIPE_SECRET_KEY")?,
            api_base: std::env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".into()),
            success_url: std::env::var("CHECKOUT_SUCCESS_URL").unwrap_or_else(|_| {
                "http://localhost:8080/success?session_id={CHECKOUT_SESSION_ID}".into()
            }),
            cancel_url: std::env::var("CHECKOUT_CANCEL_URL")
                .unwrap_or_else(|_| "http://localhost:8080/cancel".into()),
            currency: std::env::var("COURSE_PRICE_CURRENCY").unwrap_or_else(|_| "inr".into()),
            unit_amount: std::env::var("COURSE_PRICE_UNIT_AMOUNT")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(1000 * 100),
        };
        Ok(Self {
            database_url,
            jwt,
            stripe,
        })
    }
}
