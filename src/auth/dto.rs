use serde::{Deserialize, Serialize};

/// Request body for signup.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for token refresh.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Response returned after signup: the access token only.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
}

/// Response returned after login or refresh: the full pair.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub access: String,
    pub refresh: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_request_deserializes() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"email":"a@b.co","username":"alice","password":"p@ssw0rd42"}"#,
        )
        .unwrap();
        assert_eq!(req.username, "alice");
    }

    #[test]
    fn login_response_shape() {
        let json = serde_json::to_value(LoginResponse {
            message: "Logged in successfully".into(),
            access: "acc".into(),
            refresh: "ref".into(),
        })
        .unwrap();
        assert_eq!(json["message"], "Logged in successfully");
        assert_eq!(json["access"], "acc");
        assert_eq!(json["refresh"], "ref");
    }
}
