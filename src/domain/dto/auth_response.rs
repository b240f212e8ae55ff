//! 인증 응답 DTO

use serde::Serialize;

use crate::domain::models::GoogleUserInfo;

/// Google 로그인 교환 성공 응답
///
/// `token`은 서명된 세션 토큰, `user`는 Google이 반환한 프로필 원본입니다.
#[derive(Debug, Serialize)]
pub struct GoogleLoginResponse {
    pub token: String,
    pub user: GoogleUserInfo,
}

/// 헬스체크 응답
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
}
