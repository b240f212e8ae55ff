//! 서버 바인딩 및 CORS 설정

use crate::errors::AppResult;

use super::{optional_or, parsed_or};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 교차 출처 요청을 허용할 단일 Origin (로컬 프론트엔드)
    pub cors_origin: String,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: optional_or(lookup, "HOST", "0.0.0.0"),
            port: parsed_or(lookup, "PORT", DEFAULT_PORT)?,
            cors_origin: optional_or(lookup, "CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
