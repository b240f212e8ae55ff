//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Google 로그인 교환과 세션 토큰 검증에서 발생하는 에러를 하나의 열거형으로 모읍니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 내부적으로는 원인을 구분하되,
//! 클라이언트에게는 `{error: "Authentication failed", details}` 형태의 일관된 응답을 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn exchange(code: &str) -> Result<GoogleTokenResponse, AppError> {
//!     if code.is_empty() {
//!         return Err(AppError::ValidationError("code is required".to_string()));
//!     }
//!
//!     provider.exchange_code(code).await
//! }
//! ```

use actix_web::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// 로그인 실패 시 클라이언트에게 전달되는 고정 에러 메시지
pub const AUTHENTICATION_FAILED: &str = "Authentication failed";

/// 애플리케이션 전역 에러 타입
///
/// 두 가지 Google 측 실패(토큰 교환, 프로필 조회)는 별도 variant로 유지되어
/// 로그에서 구분할 수 있지만, HTTP 응답은 동일한 500 응답으로 수렴합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// Authorization Code → Access Token 교환 실패 (만료, 재사용, redirect 불일치 등)
    #[error("Google token exchange failed: {details}")]
    ProviderExchange {
        /// Google이 응답한 HTTP 상태 (전송 실패 시 None)
        status: Option<u16>,
        /// Google이 반환한 원본 에러 페이로드 또는 에러 메시지
        details: Value,
    },

    /// Access Token으로 사용자 정보 조회 실패 (토큰 무효, Google 장애 등)
    #[error("Google user info request failed: {details}")]
    ProviderProfile {
        status: Option<u16>,
        details: Value,
    },

    /// 세션 토큰 서명 불일치, 형식 오류, 만료
    #[error("Invalid credential: {0}")]
    CredentialInvalid(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 설정 누락 또는 파싱 실패 (서버 시작 시점)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (토큰 서명 실패 등)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트 응답의 `details` 필드 값
    ///
    /// Google 에러는 받은 그대로, 그 외에는 에러 메시지 문자열을 사용합니다.
    pub fn details(&self) -> Value {
        match self {
            AppError::ProviderExchange { details, .. } | AppError::ProviderProfile { details, .. } => {
                details.clone()
            }
            AppError::CredentialInvalid(msg)
            | AppError::ValidationError(msg)
            | AppError::ConfigError(msg)
            | AppError::InternalError(msg) => Value::String(msg.clone()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::CredentialInvalid(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 로그인 경로의 모든 실패는 동일한 응답 형태를 가집니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": AUTHENTICATION_FAILED,
                "details": self.details()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use serde_json::json;

    fn body_json(error: &AppError) -> Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_exchange_error_response() {
        let error = AppError::ProviderExchange {
            status: Some(400),
            details: json!({"error": "invalid_grant", "error_description": "Bad Request"}),
        };
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&error);
        assert_eq!(body["error"], AUTHENTICATION_FAILED);
        assert_eq!(body["details"]["error"], "invalid_grant");
    }

    #[test]
    fn test_profile_error_response_is_generic() {
        let error = AppError::ProviderProfile {
            status: Some(401),
            details: json!({"error": {"code": 401, "status": "UNAUTHENTICATED"}}),
        };

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&error)["details"]["error"]["code"], 401);
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("code is required".to_string());
        let body = body_json(&error);

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], "code is required");
    }

    #[test]
    fn test_credential_invalid_response() {
        let error = AppError::CredentialInvalid("ExpiredSignature".to_string());

        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
