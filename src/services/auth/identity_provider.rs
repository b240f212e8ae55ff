//! 외부 신원 제공자 추상화
//!
//! 로그인 교환 흐름이 의존하는 두 번의 외부 호출(토큰 교환, 프로필 조회)을 정의합니다.

use async_trait::async_trait;

use crate::domain::{GoogleTokenResponse, GoogleUserInfo};
use crate::errors::AppResult;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Authorization Code를 Access Token으로 교환합니다.
    ///
    /// 실패 시 `AppError::ProviderExchange`
    async fn exchange_code(&self, code: &str) -> AppResult<GoogleTokenResponse>;

    /// Access Token으로 사용자 프로필을 조회합니다.
    ///
    /// 실패 시 `AppError::ProviderProfile`
    async fn fetch_profile(&self, access_token: &str) -> AppResult<GoogleUserInfo>;
}
