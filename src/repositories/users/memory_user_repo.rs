//! # 인메모리 사용자 리포지토리
//!
//! 프로세스 메모리에 사용자를 보관하는 [`UserDao`] 구현체입니다.
//! `STORAGE_BACKEND=memory`로 MongoDB 없이 서버를 실행하거나, 테스트에서 사용합니다.
//! 삽입 순서(= 생성 시각 순서)를 유지하며, MongoDB 유니크 인덱스와 같은 이메일 제약을 적용합니다.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{NewUser, User, UserPatch, UserReplacement};
use crate::utils::short_id::generate_short_id;

use super::user_repo::UserDao;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::InternalError("User store lock poisoned".to_string())
}

fn email_taken(users: &[User], email: &str, except_id: Option<&str>) -> bool {
    users
        .iter()
        .any(|u| u.email == email && Some(u.id.as_str()) != except_id)
}

fn email_conflict() -> AppError {
    AppError::ConflictError("Email already in use".to_string())
}

#[async_trait]
impl UserDao for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<String> {
        let mut users = self.users.write().map_err(poisoned)?;

        if email_taken(&users, &new_user.email, None) {
            return Err(email_conflict());
        }

        let id = generate_short_id();
        users.push(User::from_new(id.clone(), new_user));
        Ok(id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(poisoned)?;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(users.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn replace_by_id(&self, id: &str, replacement: UserReplacement) -> AppResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;

        if email_taken(&users, &replacement.email, Some(id)) {
            return Err(email_conflict());
        }

        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                *user = User::from_replacement(id.to_string(), user.created_at, replacement);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn merge_by_id(&self, id: &str, patch: UserPatch) -> AppResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;

        if let Some(email) = patch.email.as_deref() {
            if email_taken(&users, email, Some(id)) {
                return Err(email_conflict());
            }
        }

        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                patch.apply_to(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let mut users = self.users.write().map_err(poisoned)?;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "hash".to_string(),
            first_name: None,
            last_name: None,
            permission_flags: 0,
        }
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let id = repo.create(new_user("ana@example.com")).await.unwrap();

        let by_id = repo.find_by_id(&id).await.unwrap().unwrap();
        let by_email = repo.find_by_email("ana@example.com").await.unwrap().unwrap();

        assert_eq!(by_id, by_email);
        assert_eq!(by_id.password, "hash");
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("ana@example.com")).await.unwrap();

        let result = repo.create(new_user("ana@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        for i in 0..5 {
            repo.create(new_user(&format!("user{}@example.com", i)))
                .await
                .unwrap();
        }

        let page = repo.list(2, 1).await.unwrap();
        let emails: Vec<_> = page.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, vec!["user1@example.com", "user2@example.com"]);

        assert!(repo.list(10, 5).await.unwrap().is_empty());
        assert_eq!(repo.list(100, 0).await.unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn test_merge_respects_other_users_email() {
        let repo = InMemoryUserRepository::new();
        let ana = repo.create(new_user("ana@example.com")).await.unwrap();
        repo.create(new_user("bea@example.com")).await.unwrap();

        let taken = UserPatch {
            email: Some("bea@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            repo.merge_by_id(&ana, taken).await,
            Err(AppError::ConflictError(_))
        ));

        let own = UserPatch {
            email: Some("ana@example.com".to_string()),
            first_name: Some("Ana".to_string()),
            ..Default::default()
        };
        assert!(repo.merge_by_id(&ana, own).await.unwrap());
        assert_eq!(
            repo.find_by_id(&ana).await.unwrap().unwrap().first_name.as_deref(),
            Some("Ana")
        );
    }

    #[actix_web::test]
    async fn test_missing_targets_return_false() {
        let repo = InMemoryUserRepository::new();

        assert!(!repo.merge_by_id("missing", UserPatch::default()).await.unwrap());
        assert!(!repo.delete_by_id("missing").await.unwrap());
        assert!(
            !repo
                .replace_by_id(
                    "missing",
                    UserReplacement {
                        email: "x@example.com".to_string(),
                        password_hash: "hash".to_string(),
                        first_name: "X".to_string(),
                        last_name: "Y".to_string(),
                        permission_flags: 0,
                    },
                )
                .await
                .unwrap()
        );
    }

    #[actix_web::test]
    async fn test_replace_keeps_creation_time() {
        let repo = InMemoryUserRepository::new();
        let id = repo.create(new_user("ana@example.com")).await.unwrap();
        let before = repo.find_by_id(&id).await.unwrap().unwrap();

        let replaced = repo
            .replace_by_id(
                &id,
                UserReplacement {
                    email: "ana@example.com".to_string(),
                    password_hash: "hash-2".to_string(),
                    first_name: "Ana".to_string(),
                    last_name: "Silva".to_string(),
                    permission_flags: 1,
                },
            )
            .await
            .unwrap();
        assert!(replaced);

        let after = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.password, "hash-2");
    }

    #[actix_web::test]
    async fn test_delete_removes_user() {
        let repo = InMemoryUserRepository::new();
        let id = repo.create(new_user("ana@example.com")).await.unwrap();

        assert!(repo.delete_by_id(&id).await.unwrap());
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }
}
