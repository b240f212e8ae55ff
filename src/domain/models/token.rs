//! 세션 토큰 클레임 구조체
//!
//! 서버 측 세션 저장소 없이 서명과 만료 시간만으로 유효성을 판단하는 자체 포함형 토큰입니다.
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::GoogleUserInfo;

/// JWT 세션 토큰의 클레임(Payload)
///
/// 개인정보 보호를 위해 Google 프로필 중 이메일, 이름, 사진만 포함합니다.
/// 프로필에 없는 필드는 클레임에서도 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    pub fn for_profile(profile: &GoogleUserInfo, issued_at: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            email: profile.email.clone(),
            name: profile.name.clone(),
            picture: profile.picture.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
        }
    }
}
