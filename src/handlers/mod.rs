//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 비즈니스 로직은 `services` 계층에 있고,
//! 핸들러는 요청 추출과 응답 변환만 담당합니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services (AuthService)            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Google OAuth API / JWT 서명       ← External
//! └─────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod health;
