//! Authentication HTTP Handlers
//!
//! Google 로그인 교환과 세션 토큰 확인 엔드포인트를 처리합니다.
//!
//! - **로그인 교환**: `POST /auth/google`
//! - **토큰 확인**: `GET /test`
use actix_web::http::header;
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::GoogleLoginRequest;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// Google 로그인 교환 핸들러
///
/// Authorization Code를 Google과 교환하고 세션 토큰과 프로필을 반환합니다.
/// 실패 시 `500 {error: "Authentication failed", details}`.
///
/// # Endpoint
/// `POST /auth/google`
#[post("/auth/google")]
pub async fn google_login(
    auth_service: web::Data<AuthService>,
    payload: web::Json<GoogleLoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate().map_err(|e| {
        log::warn!("로그인 요청 검증 실패: {}", e);
        AppError::ValidationError(e.to_string())
    })?;

    let response = auth_service.login_with_google(&payload.code).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 세션 토큰 확인 핸들러
///
/// 유효하고 만료되지 않은 토큰이면 `1`, 그 외 모든 경우 `0`을 반환합니다.
/// 실패 사유는 응답에서 구분하지 않습니다.
///
/// # Endpoint
/// `GET /test` (`Authorization: Bearer <token>`)
#[get("/test")]
pub async fn check_token(auth_service: web::Data<AuthService>, req: HttpRequest) -> HttpResponse {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let result: u8 = if auth_service.check_credential(auth_header) { 1 } else { 0 };

    HttpResponse::Ok().json(result)
}
