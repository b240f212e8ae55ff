//! # Configuration Module
//!
//! 서비스 설정을 담당하는 모듈입니다.
//! 환경 변수는 서버 시작 시점에 한 번만 읽어 [`AppConfig`]로 만들고,
//! 이후에는 `web::Data`를 통해 핸들러와 서비스에 명시적으로 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 바인딩 주소, 포트, CORS 허용 Origin
//! - [`auth_config`] - Google OAuth 클라이언트, JWT 서명 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-client-id.apps.googleusercontent.com"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export REDIRECT_URI="http://localhost:3000"
//! export JWT_SECRET="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export PORT="3001"                              # 기본값 3001
//! export HOST="0.0.0.0"                           # 기본값 0.0.0.0
//! export CORS_ORIGIN="http://localhost:3000"      # 기본값 http://localhost:3000
//! export JWT_EXPIRATION_MINUTES="3"               # 기본값 3
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export GOOGLE_USERINFO_URI="https://www.googleapis.com/oauth2/v2/userinfo"
//! ```

use std::env;
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

pub mod server_config;
pub mod auth_config;

pub use server_config::*;
pub use auth_config::*;

/// 애플리케이션 전체 설정
///
/// 서버 시작 시 한 번 생성되며 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub google: GoogleOAuthConfig,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 구성합니다.
    ///
    /// 테스트에서는 프로세스 환경 대신 `HashMap` 기반 조회 함수를 넘길 수 있습니다.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            google: GoogleOAuthConfig::from_lookup(&lookup)?,
            jwt: JwtConfig::from_lookup(&lookup)?,
        })
    }
}

/// 필수 설정값을 읽습니다. 비어 있는 값은 누락으로 취급합니다.
pub(crate) fn required<F>(lookup: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}

pub(crate) fn optional_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::ConfigError(format!("{} 파싱 실패 ({}): {}", key, raw, e))),
        None => Ok(default),
    }
}
