//! # Google OAuth 2.0 인증 서비스
//!
//! 프론트엔드가 Google 동의 화면에서 받아 온 Authorization Code를 Google과 교환하고,
//! 발급받은 Access Token으로 사용자 프로필을 조회합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐                 ┌─────────────────┐                 ┌─────────────────┐
//! │  프론트엔드   │                 │     우리 서버     │                 │  Google OAuth   │
//! └─────────────┘                 └─────────────────┘                 └─────────────────┘
//!        │ 1. POST /auth/google {code}       │                                   │
//!        ├──────────────────────────────────►│ 2. POST /token (code, client ...) │
//!        │                                   ├──────────────────────────────────►│
//!        │                                   │◄────────── access_token ──────────┤
//!        │                                   │ 3. GET /oauth2/v2/userinfo        │
//!        │                                   ├──────────────────────────────────►│
//!        │                                   │◄─────────── profile ──────────────┤
//!        │ 4. {token, user}                  │                                   │
//!        │◄──────────────────────────────────┤                                   │
//! ```
//!
//! 재시도는 하지 않습니다. 어느 단계든 실패하면 Google이 보낸 원본 에러 본문을
//! 담은 에러를 반환합니다.

use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;

use crate::config::GoogleOAuthConfig;
use crate::domain::{GoogleTokenResponse, GoogleUserInfo};
use crate::errors::{AppError, AppResult};

use super::IdentityProvider;

/// Google OAuth 2.0 클라이언트
///
/// `reqwest::Client`는 내부적으로 커넥션 풀을 공유하므로 서비스 하나에 하나만 둡니다.
/// 타임아웃은 클라이언트 기본값을 따릅니다.
#[derive(Clone)]
pub struct GoogleAuthService {
    client: reqwest::Client,
    config: GoogleOAuthConfig,
}

impl GoogleAuthService {
    pub fn new(config: GoogleOAuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleAuthService {
    /// Authorization Code를 Access Token으로 교환
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=AUTHORIZATION_CODE&
    /// client_id=YOUR_CLIENT_ID&
    /// client_secret=YOUR_CLIENT_SECRET&
    /// redirect_uri=YOUR_REDIRECT_URI&
    /// grant_type=authorization_code
    /// ```
    ///
    /// # 에러 처리
    ///
    /// | 에러 코드 | 설명 |
    /// |-----------|------|
    /// | `invalid_grant` | 코드 만료/재사용, redirect_uri 불일치 |
    /// | `invalid_client` | 클라이언트 설정 오류 |
    /// | `invalid_request` | 잘못된 요청 형식 |
    async fn exchange_code(&self, code: &str) -> AppResult<GoogleTokenResponse> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ProviderExchange {
                status: e.status().map(|s| s.as_u16()),
                details: Value::String(e.to_string()),
            })?;

        if !response.status().is_success() {
            let (status, details) = failure_payload(response).await;
            return Err(AppError::ProviderExchange {
                status: Some(status),
                details,
            });
        }

        let status = response.status().as_u16();
        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ProviderExchange {
                status: Some(status),
                details: Value::String(format!("Google 토큰 응답 파싱 실패: {}", e)),
            })
    }

    /// Access Token으로 Google 사용자 정보 조회
    ///
    /// ```text
    /// GET https://www.googleapis.com/oauth2/v2/userinfo
    /// Authorization: Bearer ACCESS_TOKEN
    /// ```
    async fn fetch_profile(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self
            .client
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ProviderProfile {
                status: e.status().map(|s| s.as_u16()),
                details: Value::String(e.to_string()),
            })?;

        if !response.status().is_success() {
            let (status, details) = failure_payload(response).await;
            return Err(AppError::ProviderProfile {
                status: Some(status),
                details,
            });
        }

        let status = response.status().as_u16();
        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ProviderProfile {
                status: Some(status),
                details: Value::String(format!("Google 사용자 정보 파싱 실패: {}", e)),
            })
    }
}

/// 실패 응답의 상태 코드와 본문을 꺼냅니다.
///
/// JSON 본문은 그대로, 그 외 본문은 문자열로 보존합니다.
async fn failure_payload(response: Response) -> (u16, Value) {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    let details = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));

    (status, details)
}
