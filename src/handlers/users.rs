//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users?limit&offset` | 사용자 목록 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users/{user_id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/users/{user_id}` | 사용자 전체 교체 | 204 No Content |
//! | `PATCH` | `/users/{user_id}` | 사용자 부분 수정 | 204 No Content |
//! | `DELETE` | `/users/{user_id}` | 사용자 삭제 | 204 No Content |
//!
//! `{user_id}` 경로의 핸들러는 [`UserExists`](crate::middlewares::UserExists) 미들웨어가
//! 적용된 스코프 안에서만 등록되며, 조회된 사용자를 [`ExistingUser`] 추출자로 받습니다.
//!
//! ## 처리 순서
//!
//! 1. 본문 추출 (깨진 JSON → 400, 필드 타입 불일치 → 400 + `fields`)
//! 2. 이메일 정규화 후 `validate()` (필드 위반 → 400 + `fields`)
//! 3. 이메일 가드 (중복 → 409)
//! 4. 비밀번호 해싱 (blocking 스레드 풀)
//! 5. 서비스 호출

use std::time::Instant;

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use validator::Validate;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::{
    CreateUserRequest, CreateUserResponse, ListUsersQuery, PatchUserRequest, PutUserRequest,
    UserResponse, parse_body,
};
use crate::domain::models::ExistingUser;
use crate::middlewares::{ensure_email_available, ensure_email_belongs_to};
use crate::state::AppState;

/// 비밀번호를 bcrypt로 해싱합니다.
///
/// 해싱은 CPU를 오래 점유하므로 actix 워커 대신 blocking 스레드 풀에서 실행합니다.
async fn hash_password(plain: String, cost: u32) -> AppResult<String> {
    let started = Instant::now();

    let hashed = web::block(move || bcrypt::hash(plain, cost))
        .await
        .context("비밀번호 해싱 작업 실패")?
        .context("비밀번호 해싱 실패")?;

    log::debug!("Password hashing took: {:?}", started.elapsed());
    Ok(hashed)
}

/// 사용자 목록 조회
///
/// # Query
///
/// - `limit`: 1..=1000 (생략 시 `DEFAULT_PAGE_LIMIT`)
/// - `offset`: 건너뛸 개수 (생략 시 0)
///
/// # Response
///
/// `200 OK` + `UserResponse` 배열 (최대 `limit`개)
#[get("")]
pub async fn list_users(
    state: web::Data<AppState>,
    query: web::Query<ListUsersQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let users = state
        .user_service
        .list(query.limit(), query.offset())
        .await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 새 사용자 생성
///
/// # Request Body
///
/// ```json
/// { "email": "ana@example.com", "password": "secret1", "firstName": "Ana" }
/// ```
///
/// # Response
///
/// `201 Created` + `{ "id": "q3Jk1x_9aZbT" }`
///
/// # Errors
///
/// - `400`: 필수 필드 누락, 이메일 형식 오류, 비밀번호 길이(5-20) 위반
/// - `409`: 이미 사용 중인 이메일
#[post("")]
pub async fn create_user(
    state: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let request = parse_body::<CreateUserRequest>(payload.into_inner())?.normalized();
    request.validate()?;

    let email = request.email.as_deref().unwrap_or_default();
    ensure_email_available(&state.user_service, email).await?;

    let password_hash =
        hash_password(request.plain_password()?.to_string(), state.bcrypt_cost).await?;
    let id = state
        .user_service
        .create(request.into_new_user(password_hash)?)
        .await?;

    Ok(HttpResponse::Created().json(CreateUserResponse { id }))
}

/// 사용자 조회
///
/// 존재 확인 미들웨어가 조회한 사용자를 그대로 응답합니다. 비밀번호는 포함되지 않습니다.
#[get("")]
pub async fn get_user(existing: ExistingUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(existing.into_inner())))
}

/// 사용자 전체 교체
///
/// `email`, `password`, `firstName`, `lastName`, `permissionFlags` 모두 필수입니다.
/// 이메일은 사용 중이지 않거나 대상 사용자 본인의 것이어야 합니다.
#[put("")]
pub async fn put_user(
    state: web::Data<AppState>,
    existing: ExistingUser,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let request = parse_body::<PutUserRequest>(payload.into_inner())?.normalized();
    request.validate()?;

    let email = request.email.as_deref().unwrap_or_default();
    ensure_email_belongs_to(&state.user_service, email, existing.id()).await?;

    let password_hash =
        hash_password(request.plain_password()?.to_string(), state.bcrypt_cost).await?;
    state
        .user_service
        .replace_by_id(existing.id(), request.into_replacement(password_hash)?)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 부분 수정
///
/// 허용된 필드만 병합되며 그 외 본문 필드는 무시됩니다.
/// 본문에 이메일이 있을 때만 이메일 가드를 실행합니다.
#[patch("")]
pub async fn patch_user(
    state: web::Data<AppState>,
    existing: ExistingUser,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let mut request = parse_body::<PatchUserRequest>(payload.into_inner())?.normalized();
    request.validate()?;

    if let Some(email) = request.email.as_deref() {
        ensure_email_belongs_to(&state.user_service, email, existing.id()).await?;
    }

    let password_hash = match request.password.take() {
        Some(plain) => Some(hash_password(plain, state.bcrypt_cost).await?),
        None => None,
    };
    state
        .user_service
        .merge_by_id(existing.id(), request.into_patch(password_hash))
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 삭제
#[delete("")]
pub async fn delete_user(
    state: web::Data<AppState>,
    existing: ExistingUser,
) -> Result<HttpResponse, AppError> {
    state.user_service.delete_by_id(existing.id()).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_hash_password_is_salted() {
        let first = hash_password("secret1".to_string(), 4).await.unwrap();
        let second = hash_password("secret1".to_string(), 4).await.unwrap();

        assert_ne!(first, second);
        assert!(bcrypt::verify("secret1", &first).unwrap());
        assert!(bcrypt::verify("secret1", &second).unwrap());
    }

    #[actix_web::test]
    async fn test_hash_password_rejects_invalid_cost() {
        match hash_password("secret1".to_string(), 2).await {
            Err(AppError::InternalError(msg)) => assert!(msg.starts_with("비밀번호 해싱 실패: ")),
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
