//! Google 로그인 백엔드 메인 애플리케이션
//!
//! 환경 설정을 한 번 읽어 [`AppConfig`]를 만들고, Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use google_auth_backend::config::{AppConfig, ServerConfig};
use google_auth_backend::routes::configure_all_routes;
use google_auth_backend::services::auth::AuthService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_report = load_env_file();
    init_logging();

    match env_report {
        Ok(msg) => info!("{}", msg),
        Err(msg) => error!("{}", msg),
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("🚀 Google 로그인 서비스 시작중...");
    info!("Google OAuth 설정: {:?}", config.google);
    info!("JWT 설정: {:?}", config.jwt);

    start_http_server(config).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig) -> std::io::Result<()> {
    let auth_service = web::Data::new(AuthService::from_config(&config));
    let server_config = config.server.clone();
    let (host, port) = server_config.bind_address();

    info!("🌐 Server running on port {} (http://{}:{})", port, host, port);
    info!("📍 CORS 허용 Origin: {}", server_config.cors_origin);

    HttpServer::new(move || {
        App::new()
            .app_data(auth_service.clone())
            .wrap(configure_cors(&server_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind((host, port))?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거보다 먼저 호출되므로 `.env`의 `RUST_LOG`도 로깅 필터에 반영됩니다.
/// 로드 결과는 로거 초기화 후에 출력할 수 있도록 문자열로 돌려줍니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타/미설정 - 기본 .env 파일 로드
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_default();

    match env_file_for(&profile) {
        Some(filename) => dotenv::from_filename(filename)
            .map(|_| format!("{} 파일 로드 됨 (profile: {})", filename, profile))
            .map_err(|e| format!("{} 파일 로드 실패: {}", filename, e)),
        None => {
            dotenv().ok();
            Ok("기본 .env 파일 로드 (profile: default)".to_string())
        }
    }
}

/// 프로필별 설정 파일 이름
fn env_file_for(profile: &str) -> Option<&'static str> {
    match profile {
        "prod" => Some(".env.prod"),
        "dev" => Some(".env.dev"),
        _ => None,
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 설정된 단일 Origin(로컬 프론트엔드)만 허용합니다.
fn configure_cors(server_config: &ServerConfig) -> Cors {
    Cors::default()
        .allowed_origin(&server_config.cors_origin)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
