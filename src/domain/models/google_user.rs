//! # Google OAuth 사용자 정보 모델
//!
//! Google UserInfo API(v2)가 반환하는 프로필을 표현합니다.
//! 세션 토큰에 들어가는 필드만 타입으로 꺼내고, 나머지 필드는 그대로 보존하여
//! 클라이언트에게 원본 그대로 돌려줍니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 이메일 (`email` 스코프)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// 표시 이름 (`profile` 스코프)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// 프로필 사진 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// id, verified_email, given_name, family_name, locale 등 나머지 필드
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_preserves_unknown_fields() {
        let raw = json!({
            "id": "1234567890",
            "email": "a@b.com",
            "verified_email": true,
            "name": "A B",
            "given_name": "A",
            "family_name": "B",
            "picture": "http://example.com/a.jpg",
            "locale": "ko"
        });

        let profile: GoogleUserInfo = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(profile.email.as_deref(), Some("a@b.com"));
        assert_eq!(profile.name.as_deref(), Some("A B"));
        assert_eq!(profile.extra["verified_email"], true);
        assert_eq!(serde_json::to_value(&profile).unwrap(), raw);
    }

    #[test]
    fn test_profile_without_optional_fields() {
        let profile: GoogleUserInfo = serde_json::from_value(json!({"id": "42"})).unwrap();

        assert!(profile.email.is_none());
        assert!(profile.picture.is_none());
        assert_eq!(serde_json::to_value(&profile).unwrap(), json!({"id": "42"}));
    }
}
