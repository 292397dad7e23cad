//! # 이메일 중복 가드
//!
//! 생성/수정 핸들러가 저장소를 호출하기 전에 실행하는 이메일 유일성 검사입니다.
//!
//! | 가드 | 사용 라우트 | 통과 조건 |
//! |------|-------------|-----------|
//! | [`ensure_email_available`] | `POST /users` | 이메일을 쓰는 사용자가 없음 |
//! | [`ensure_email_belongs_to`] | `PUT`, `PATCH /users/{userId}` | 없거나, 대상 사용자 본인의 이메일 |
//!
//! 두 가드 모두 정규화된 이메일을 받으며, 위반 시 `409 Conflict`를 반환합니다.
//! 검사와 저장 사이의 경쟁 상태는 MongoDB 유니크 인덱스가 최종적으로 막습니다.

use crate::core::errors::{AppError, AppResult};
use crate::services::users::UserService;

fn email_in_use() -> AppError {
    AppError::ConflictError("Email already in use".to_string())
}

/// 이메일을 사용하는 사용자가 없어야 통과합니다.
pub async fn ensure_email_available(service: &UserService, email: &str) -> AppResult<()> {
    match service.read_by_email(email).await? {
        Some(_) => Err(email_in_use()),
        None => Ok(()),
    }
}

/// 이메일을 사용하는 사용자가 없거나 `user_id` 본인이어야 통과합니다.
pub async fn ensure_email_belongs_to(
    service: &UserService,
    email: &str,
    user_id: &str,
) -> AppResult<()> {
    match service.read_by_email(email).await? {
        Some(owner) if owner.id != user_id => {
            log::debug!("이메일 충돌: {} 은(는) 사용자 {} 소유", email, owner.id);
            Err(email_in_use())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::users::NewUser;
    use crate::repositories::users::InMemoryUserRepository;

    async fn service_with_user(email: &str) -> (UserService, String) {
        let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
        let id = service
            .create(NewUser {
                email: email.to_string(),
                password_hash: "hash".to_string(),
                first_name: None,
                last_name: None,
                permission_flags: 0,
            })
            .await
            .unwrap();
        (service, id)
    }

    #[actix_web::test]
    async fn test_available_email() {
        let (service, _) = service_with_user("ana@example.com").await;

        assert!(ensure_email_available(&service, "bea@example.com").await.is_ok());
        assert!(matches!(
            ensure_email_available(&service, "ana@example.com").await,
            Err(AppError::ConflictError(_))
        ));
    }

    #[actix_web::test]
    async fn test_email_belongs_to_owner() {
        let (service, id) = service_with_user("ana@example.com").await;

        assert!(ensure_email_belongs_to(&service, "ana@example.com", &id).await.is_ok());
        assert!(ensure_email_belongs_to(&service, "new@example.com", &id).await.is_ok());
        assert!(matches!(
            ensure_email_belongs_to(&service, "ana@example.com", "someone-else").await,
            Err(AppError::ConflictError(_))
        ));
    }
}
