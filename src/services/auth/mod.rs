//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 코드 교환과 JWT 세션 토큰 발급/검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 짧은 토큰 수명 (기본 3분), 만료 검증에 여유 시간 없음
//! - Google Access Token은 요청 안에서만 쓰이고 저장되거나 반환되지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let auth_service = AuthService::from_config(&config);
//! let response = auth_service.login_with_google(&code).await?;
//! let valid = auth_service.check_credential(Some(&format!("Bearer {}", response.token)));
//! ```

pub mod identity_provider;
pub mod token_service;
pub mod google_auth_service;
pub mod auth_service;

pub use identity_provider::*;
pub use token_service::*;
pub use google_auth_service::*;
pub use auth_service::*;
