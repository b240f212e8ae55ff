use actix_web::{get, HttpResponse};

use crate::domain::StatusResponse;

/// 서버 작동 확인용 루트 엔드포인트
///
/// # Endpoint
/// `GET /` → `{"message": "Server is running!"}`
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(StatusResponse {
        message: "Server is running!",
    })
}
