//! Google 로그인 백엔드
//!
//! 프론트엔드가 Google OAuth 동의 후 받은 Authorization Code를 Google과 교환하여
//! 사용자 프로필을 얻고, 짧은 수명(기본 3분)의 JWT 세션 토큰을 발급합니다.
//! 발급한 토큰이 유효한지 확인하는 엔드포인트도 제공합니다.
//!
//! 서버 측 상태는 없습니다. 사용자 저장소, 세션 저장소, 토큰 갱신/폐기는 다루지 않습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← GET /, POST /auth/google, GET /test
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   AuthService   │ ← 코드 교환 → 프로필 조회 → 토큰 발급 / 토큰 확인
//! └─────────────────┘
//!     │         │
//!     ▼         ▼
//! ┌────────┐ ┌──────────────┐
//! │ Google │ │ TokenService │
//! └────────┘ └──────────────┘
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
