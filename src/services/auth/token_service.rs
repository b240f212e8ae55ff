//! JWT 세션 토큰 관리 서비스 구현
//!
//! Google 프로필의 일부를 담은 짧은 수명의 세션 토큰을 발급하고 검증합니다.
//! 서버에는 어떤 세션 기록도 남지 않으며, 유효성은 서명과 만료 시간만으로 판단합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::JwtConfig;
use crate::domain::models::{GoogleUserInfo, SessionClaims};
use crate::errors::{AppError, AppResult, ErrorContext};

/// JWT 세션 토큰 서비스
///
/// HMAC-SHA256 서명을 사용합니다. 만료 검증에는 여유 시간(leeway)을 두지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            lifetime: Duration::minutes(config.expiration_minutes),
        }
    }

    /// 세션 토큰 유효 시간
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    /// 현재 시각 기준으로 세션 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_session_token(&profile)?;
    /// ```
    pub fn issue_session_token(&self, profile: &GoogleUserInfo) -> AppResult<String> {
        self.issue_session_token_at(profile, Utc::now())
    }

    /// 지정한 발급 시각으로 세션 토큰을 발급합니다.
    pub fn issue_session_token_at(
        &self,
        profile: &GoogleUserInfo,
        issued_at: DateTime<Utc>,
    ) -> AppResult<String> {
        let claims = SessionClaims::for_profile(profile, issued_at, self.lifetime);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// 세션 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::CredentialInvalid` - 서명 불일치, 형식 오류, 만료 (호출자에게는 구분하지 않음)
    pub fn verify_token(&self, token: &str) -> AppResult<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::CredentialInvalid("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::CredentialInvalid("토큰 서명이 일치하지 않습니다".to_string())
                }
                _ => AppError::CredentialInvalid(format!("유효하지 않은 토큰입니다: {}", e)),
            })?;

        // jsonwebtoken은 exp == now를 유효로 보므로 만료 시각 당일 초도 거부한다
        if claims.exp <= Utc::now().timestamp() {
            return Err(AppError::CredentialInvalid("토큰이 만료되었습니다".to_string()));
        }

        Ok(claims)
    }

    /// Authorization 헤더 값에서 토큰 부분 추출
    ///
    /// 헤더를 공백으로 나눈 두 번째 조각을 토큰으로 봅니다. 없거나 비어 있으면 `None`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(token_service.extract_bearer_token("Bearer abc"), Some("abc"));
    /// assert_eq!(token_service.extract_bearer_token("Bearer"), None);
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Option<&'a str> {
        auth_header
            .split(' ')
            .nth(1)
            .filter(|token| !token.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_service(secret: &str) -> TokenService {
        TokenService::new(&JwtConfig {
            secret: secret.to_string(),
            expiration_minutes: 3,
        })
    }

    fn profile() -> GoogleUserInfo {
        GoogleUserInfo {
            email: Some("a@b.com".to_string()),
            name: Some("A B".to_string()),
            picture: Some("http://example.com/a.jpg".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_issued_token_verifies() {
        let service = token_service("secret");
        let token = service.issue_session_token(&profile()).unwrap();

        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.email.as_deref(), Some("a@b.com"));
        assert_eq!(claims.name.as_deref(), Some("A B"));
        assert_eq!(claims.picture.as_deref(), Some("http://example.com/a.jpg"));
        assert_eq!(claims.exp - claims.iat, 180);
    }

    #[test]
    fn test_token_within_lifetime_verifies() {
        let service = token_service("secret");
        let issued_at = Utc::now() - Duration::minutes(2);
        let token = service.issue_session_token_at(&profile(), issued_at).unwrap();

        assert!(service.verify_token(&token).is_ok());
    }

    #[test]
    fn test_token_at_exact_lifetime_is_rejected() {
        let service = token_service("secret");
        let issued_at = Utc::now() - Duration::minutes(3);
        let token = service.issue_session_token_at(&profile(), issued_at).unwrap();

        match service.verify_token(&token) {
            Err(AppError::CredentialInvalid(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected CredentialInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = token_service("secret");
        let issued_at = Utc::now() - Duration::minutes(4);
        let token = service.issue_session_token_at(&profile(), issued_at).unwrap();

        match service.verify_token(&token) {
            Err(AppError::CredentialInvalid(msg)) => assert!(msg.contains("만료")),
            other => panic!("Expected CredentialInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let forged = token_service("other-secret")
            .issue_session_token(&profile())
            .unwrap();

        assert!(matches!(
            token_service("secret").verify_token(&forged),
            Err(AppError::CredentialInvalid(_))
        ));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(token_service("secret").verify_token("not.a.jwt").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = token_service("secret");

        assert_eq!(service.extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(service.extract_bearer_token("Bearer"), None);
        assert_eq!(service.extract_bearer_token("Bearer "), None);
        assert_eq!(service.extract_bearer_token(""), None);
    }
}
