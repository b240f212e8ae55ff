//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문과 Google API 응답을 매핑하는 구조체들입니다.

pub mod auth_request;
pub mod auth_response;
pub mod google_oauth_response;

pub use auth_request::*;
pub use auth_response::*;
pub use google_oauth_response::*;
