//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생성, 조회, 교체, 부분 수정, 삭제를 저장소 계층에 위임하는 서비스입니다.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │  • 저장소 호출 위임                           │
//! │  • 대상 없음(false) → NotFound                │
//! │  • 엔티티 → 응답 DTO 변환 (목록)              │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │            Arc<dyn UserDao>                  │
//! │  MongoUserRepository | InMemoryUserRepository│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 요청 형식 검증, 이메일 중복 검사, 비밀번호 해싱은 핸들러 앞단에서 끝난 상태로
//! 호출된다고 가정합니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UserResponse;
use crate::domain::entities::users::{NewUser, User, UserPatch, UserReplacement};
use crate::repositories::users::UserDao;

pub struct UserService {
    dao: Arc<dyn UserDao>,
}

fn user_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}

impl UserService {
    pub fn new(dao: Arc<dyn UserDao>) -> Self {
        Self { dao }
    }

    /// 새 사용자를 생성하고 할당된 ID를 반환합니다.
    pub async fn create(&self, new_user: NewUser) -> AppResult<String> {
        let id = self.dao.create(new_user).await?;

        log::info!("User created: {}", id);
        Ok(id)
    }

    pub async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<UserResponse>> {
        let users = self.dao.list(limit, offset).await?;

        log::debug!(
            "Listed {} users (limit={}, offset={})",
            users.len(),
            limit,
            offset
        );
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자를 조회합니다. 없으면 `None`.
    pub async fn read_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.dao.find_by_id(id).await
    }

    /// 정규화된 이메일로 사용자를 조회합니다. 없으면 `None`.
    pub async fn read_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.dao.find_by_email(email).await
    }

    /// ID를 제외한 모든 필드를 교체합니다.
    pub async fn replace_by_id(&self, id: &str, replacement: UserReplacement) -> AppResult<()> {
        if !self.dao.replace_by_id(id, replacement).await? {
            return Err(user_not_found(id));
        }

        log::info!("User replaced: {}", id);
        Ok(())
    }

    /// 패치에 포함된 필드만 병합합니다.
    pub async fn merge_by_id(&self, id: &str, patch: UserPatch) -> AppResult<()> {
        if !self.dao.merge_by_id(id, patch).await? {
            return Err(user_not_found(id));
        }

        log::info!("User patched: {}", id);
        Ok(())
    }

    pub async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        if !self.dao.delete_by_id(id).await? {
            return Err(user_not_found(id));
        }

        log::info!("User deleted: {}", id);
        Ok(())
    }
}
