//! Google OAuth 응답 DTO 모듈
//!
//! Authorization Code를 Access Token으로 교환할 때 Google이 반환하는 데이터를 표현합니다.

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환 응답
///
/// 이 서비스는 `access_token`만 사용합니다. 나머지 필드는 진단 로그용입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 타입 (보통 "Bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// 부여된 권한 범위
    #[serde(default)]
    pub scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_token_response() {
        let response: GoogleTokenResponse =
            serde_json::from_str(r#"{"access_token":"tok"}"#).unwrap();

        assert_eq!(response.access_token, "tok");
        assert!(response.token_type.is_none());
        assert!(response.scope.is_none());
    }

    #[test]
    fn test_missing_access_token_is_rejected() {
        let result = serde_json::from_str::<GoogleTokenResponse>(r#"{"token_type":"Bearer"}"#);

        assert!(result.is_err());
    }
}
