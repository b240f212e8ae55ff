//! # Domain Layer
//!
//! 요청/응답 DTO와 도메인 모델을 담습니다. 모든 값은 한 요청 안에서 만들어지고
//! 소비되며, 영구 저장되지 않습니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
