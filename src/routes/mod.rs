//! # Route Table
//!
//! 애플리케이션의 모든 HTTP 라우트를 등록하는 모듈입니다.
//! 리소스 그룹마다 [`RoutesConfig`]를 구현하여 이름, 엔드포인트 목록, 등록 절차를 한 곳에 둡니다.
//!
//! ## 등록된 라우트
//!
//! | Method | Path | 처리 순서 |
//! |--------|------|-----------|
//! | GET | /users | 쿼리 검증 → 목록 |
//! | POST | /users | 본문 검증 → 이메일 중복 검사 → 생성 |
//! | GET | /users/{user_id} | 존재 확인 → 조회 |
//! | PUT | /users/{user_id} | 존재 확인 → 본문 검증(전체) → 이메일 소유 검사 → 교체 |
//! | PATCH | /users/{user_id} | 존재 확인 → 본문 검증(선택) → 이메일 소유 검사 → 병합 |
//! | DELETE | /users/{user_id} | 존재 확인 → 삭제 |
//! | GET | /health | 헬스 체크 |
//!
//! 라우트는 시작 시 한 번만 등록됩니다.

use actix_web::{HttpResponse, error::JsonPayloadError, error::QueryPayloadError, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::UserExists;
use crate::state::AppState;


/// 리소스 그룹 단위의 라우트 설정
pub trait RoutesConfig {
    /// 시작 로그에 표시되는 그룹 이름
    fn name(&self) -> &'static str;

    /// `(method, path)` 엔드포인트 목록
    fn endpoints(&self) -> &'static [(&'static str, &'static str)];

    /// 그룹의 라우트를 actix-web에 등록합니다.
    fn configure(&self, cfg: &mut web::ServiceConfig);
}

/// `/users` 리소스 그룹
pub struct UsersRoutes;

const USERS_ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/users"),
    ("POST", "/users"),
    ("GET", "/users/{user_id}"),
    ("PUT", "/users/{user_id}"),
    ("PATCH", "/users/{user_id}"),
    ("DELETE", "/users/{user_id}"),
];

impl RoutesConfig for UsersRoutes {
    fn name(&self) -> &'static str {
        "UsersRoutes"
    }

    fn endpoints(&self) -> &'static [(&'static str, &'static str)] {
        USERS_ENDPOINTS
    }

    fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::scope("/users")
                .service(handlers::users::list_users)
                .service(handlers::users::create_user)
                .service(
                    web::scope("/{user_id}")
                        .wrap(UserExists::new("user_id"))
                        .service(handlers::users::get_user)
                        .service(handlers::users::put_user)
                        .service(handlers::users::patch_user)
                        .service(handlers::users::delete_user),
                ),
        );
    }
}

/// 애플리케이션에 등록되는 모든 라우트 그룹
pub fn route_groups() -> Vec<Box<dyn RoutesConfig>> {
    vec![Box::new(UsersRoutes)]
}

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출자 에러를 AppError 형식의 400 응답으로 통일
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    for group in route_groups() {
        group.configure(cfg);
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    AppError::ValidationError(err.to_string()).into()
}

#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": state.storage.as_str(),
    }))
}
