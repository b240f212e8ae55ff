//! # Authentication Configuration Module
//!
//! Google OAuth 클라이언트 정보와 세션 토큰(JWT) 서명 설정을 관리합니다.
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export REDIRECT_URI="http://localhost:3000"
//! ```
//!
//! `REDIRECT_URI`가 없으면 `GOOGLE_REDIRECT_URI`를 사용합니다.
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_MINUTES="3"
//! ```

use std::fmt;

use crate::errors::{AppError, AppResult};

use super::{optional_or, parsed_or, required};

pub const DEFAULT_GOOGLE_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_GOOGLE_USERINFO_URI: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
pub const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 3;

/// Google OAuth 2.0 클라이언트 설정
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// 토큰 교환 엔드포인트
    pub token_uri: String,
    /// 사용자 정보 엔드포인트
    pub userinfo_uri: String,
}

impl GoogleOAuthConfig {
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redirect_uri = required(lookup, "REDIRECT_URI")
            .or_else(|_| required(lookup, "GOOGLE_REDIRECT_URI"))
            .map_err(|_| AppError::ConfigError("REDIRECT_URI must be set".to_string()))?;

        Ok(Self {
            client_id: required(lookup, "GOOGLE_CLIENT_ID")?,
            client_secret: required(lookup, "GOOGLE_CLIENT_SECRET")?,
            redirect_uri,
            token_uri: optional_or(lookup, "GOOGLE_TOKEN_URI", DEFAULT_GOOGLE_TOKEN_URI),
            userinfo_uri: optional_or(lookup, "GOOGLE_USERINFO_URI", DEFAULT_GOOGLE_USERINFO_URI),
        })
    }
}

impl fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .finish()
    }
}

/// 세션 토큰 서명 설정
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// 세션 토큰 유효 시간 (분)
    pub expiration_minutes: i64,
}

impl JwtConfig {
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expiration_minutes =
            parsed_or(lookup, "JWT_EXPIRATION_MINUTES", DEFAULT_JWT_EXPIRATION_MINUTES)?;

        if expiration_minutes <= 0 {
            return Err(AppError::ConfigError(format!(
                "JWT_EXPIRATION_MINUTES must be positive: {}",
                expiration_minutes
            )));
        }

        Ok(Self {
            secret: required(lookup, "JWT_SECRET")?,
            expiration_minutes,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_support::{base_vars, lookup};

    #[test]
    fn test_redirect_uri_fallback() {
        let mut vars = base_vars();
        vars.remove("REDIRECT_URI");
        vars.insert("GOOGLE_REDIRECT_URI", "http://localhost:3000/callback".to_string());

        let config = GoogleOAuthConfig::from_lookup(&lookup(&vars)).unwrap();
        assert_eq!(config.redirect_uri, "http://localhost:3000/callback");
    }

    #[test]
    fn test_redirect_uri_missing() {
        let mut vars = base_vars();
        vars.remove("REDIRECT_URI");

        assert!(GoogleOAuthConfig::from_lookup(&lookup(&vars)).is_err());
    }

    #[test]
    fn test_endpoint_overrides() {
        let mut vars = base_vars();
        vars.insert("GOOGLE_TOKEN_URI", "http://127.0.0.1:9000/token".to_string());
        vars.insert("GOOGLE_USERINFO_URI", "http://127.0.0.1:9000/userinfo".to_string());

        let config = GoogleOAuthConfig::from_lookup(&lookup(&vars)).unwrap();
        assert_eq!(config.token_uri, "http://127.0.0.1:9000/token");
        assert_eq!(config.userinfo_uri, "http://127.0.0.1:9000/userinfo");
    }

    #[test]
    fn test_jwt_expiration_must_be_positive() {
        let mut vars = base_vars();
        vars.insert("JWT_EXPIRATION_MINUTES", "0".to_string());

        assert!(JwtConfig::from_lookup(&lookup(&vars)).is_err());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let vars = base_vars();
        let google = GoogleOAuthConfig::from_lookup(&lookup(&vars)).unwrap();
        let jwt = JwtConfig::from_lookup(&lookup(&vars)).unwrap();

        assert!(!format!("{:?}", google).contains("client-secret"));
        assert!(!format!("{:?}", jwt).contains("test-secret"));
    }
}
