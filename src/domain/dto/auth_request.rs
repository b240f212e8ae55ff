//! 인증 요청관련 DTO
//!
//! 프론트엔드가 Google 동의 화면에서 받은 Authorization Code를 전달하는 요청을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// Google 로그인 교환 요청 구조체
///
/// `POST /auth/google` 본문 `{ "code": "..." }`
#[derive(Debug, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    /// 필드가 없으면 빈 문자열로 받아 검증 단계에서 거부합니다.
    #[serde(default)]
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,
}
