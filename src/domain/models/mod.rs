//! 도메인 모델
//!
//! Google 프로필과 세션 토큰 클레임을 정의합니다.

pub mod google_user;
pub mod token;

pub use google_user::*;
pub use token::*;
