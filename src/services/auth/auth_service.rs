//! 로그인 교환과 세션 토큰 확인 흐름
//!
//! 핸들러는 이 서비스만 사용합니다. 외부 호출은 [`IdentityProvider`] 뒤에 숨겨져 있어
//! 테스트에서 메모리 구현으로 교체할 수 있습니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::GoogleLoginResponse;
use crate::errors::AppResult;

use super::{GoogleAuthService, IdentityProvider, TokenService};

pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
    token_service: TokenService,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>, token_service: TokenService) -> Self {
        Self {
            provider,
            token_service,
        }
    }

    /// Google 클라이언트와 토큰 서비스를 설정으로부터 구성합니다.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(GoogleAuthService::new(config.google.clone())),
            TokenService::new(&config.jwt),
        )
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }

    /// Authorization Code로 로그인하고 세션 토큰을 발급합니다.
    ///
    /// 1. Code → Access Token 교환
    /// 2. Access Token → 프로필 조회
    /// 3. 프로필 일부를 담은 세션 토큰 서명
    ///
    /// 어느 단계든 실패하면 원본 에러를 로그로 남기고 그대로 반환합니다.
    /// 이전 단계가 실패하면 다음 단계는 실행되지 않습니다.
    pub async fn login_with_google(&self, code: &str) -> AppResult<GoogleLoginResponse> {
        log::info!("Google 로그인 요청 수신");
        log::debug!("Received code: {}", code);

        let result = self.exchange_and_issue(code).await;

        if let Err(e) = &result {
            log::error!("Auth error: {}", e);
        }

        result
    }

    async fn exchange_and_issue(&self, code: &str) -> AppResult<GoogleLoginResponse> {
        let token_response = self.provider.exchange_code(code).await?;
        log::info!(
            "Got access token (type: {}, expires_in: {:?}, scope: {})",
            token_response.token_type.as_deref().unwrap_or("unknown"),
            token_response.expires_in,
            token_response.scope.as_deref().unwrap_or("-")
        );

        let user = self.provider.fetch_profile(&token_response.access_token).await?;
        log::info!("User info: {}", user.email.as_deref().unwrap_or("<no email>"));
        log::debug!("User profile: {:?}", user);

        let token = self.token_service.issue_session_token(&user)?;
        log::info!(
            "세션 토큰 발급 (유효 시간 {}분)",
            self.token_service.lifetime().num_minutes()
        );

        Ok(GoogleLoginResponse { token, user })
    }

    /// Authorization 헤더로 전달된 세션 토큰이 유효한지 확인합니다.
    ///
    /// 헤더 없음, 토큰 없음, 서명 불일치, 만료는 모두 `false`이며 에러로 올리지 않습니다.
    pub fn check_credential(&self, auth_header: Option<&str>) -> bool {
        let Some(auth_header) = auth_header else {
            log::info!("No authorization header");
            return false;
        };

        let Some(token) = self.token_service.extract_bearer_token(auth_header) else {
            log::info!("No token found");
            return false;
        };

        match self.token_service.verify_token(token) {
            Ok(claims) => {
                log::info!(
                    "Token verified for user: {}",
                    claims.email.as_deref().unwrap_or("<no email>")
                );
                true
            }
            Err(e) => {
                log::info!("Token verification failed: {}", e);
                false
            }
        }
    }
}
