//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션을 사용하는 [`UserDao`] 구현체입니다.
//!
//! ## 컬렉션
//!
//! - **컬렉션명**: `users`
//! - **문서 형태**: `{ _id, email, password, firstName?, lastName?, permissionFlags, createdAt }`
//! - **인덱스**: `email_unique` (email, unique), `created_at_id` (createdAt, _id)
//!
//! 목록은 `createdAt`, `_id` 순으로 정렬되어 offset 페이지가 서로 겹치거나 빠지지 않습니다.
//!
//! 이메일 중복은 이메일 가드의 사전 확인과 유니크 인덱스 두 단계로 막습니다.
//! 동시 요청으로 사전 확인을 통과하더라도 인덱스 위반(code 11000)은 409로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    Collection, IndexModel,
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{NewUser, User, UserPatch, UserReplacement};
use crate::utils::short_id::generate_short_id;

use super::user_repo::UserDao;

/// 사용자 문서가 저장되는 컬렉션 이름
pub const COLLECTION_NAME: &str = "users";

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(COLLECTION_NAME),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 이미 존재하는 인덱스는 MongoDB가 무시하므로 매 시작 시 호출해도 안전합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let listing_index = IndexModel::builder()
            .keys(doc! { "createdAt": 1, "_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_id".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, listing_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ '{}' 컬렉션 인덱스 준비 완료", COLLECTION_NAME);
        Ok(())
    }
}

/// 쓰기 에러를 AppError로 변환합니다. 유니크 인덱스 위반은 409.
fn map_write_error(error: MongoError) -> AppError {
    match &*error.kind {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            AppError::ConflictError("Email already in use".to_string())
        }
        _ => AppError::DatabaseError(error.to_string()),
    }
}

#[async_trait]
impl UserDao for MongoUserRepository {
    async fn create(&self, new_user: NewUser) -> AppResult<String> {
        let user = User::from_new(generate_short_id(), new_user);

        self.collection
            .insert_one(&user)
            .await
            .map_err(map_write_error)?;

        debug!("사용자 문서 생성: {}", user.id);
        Ok(user.id)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>> {
        // limit은 1..=1000으로 검증된 값
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "createdAt": 1, "_id": 1 })
            .skip(offset)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn replace_by_id(&self, id: &str, replacement: UserReplacement) -> AppResult<bool> {
        // `createdAt`을 유지하기 위해 문서 전체 대신 교체 가능한 필드만 덮어씀
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": replacement.into_set_document() },
            )
            .await
            .map_err(map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn merge_by_id(&self, id: &str, patch: UserPatch) -> AppResult<bool> {
        // 빈 `$set`은 MongoDB가 거부하므로 존재 여부만 확인
        if patch.is_empty() {
            return Ok(self.find_by_id(id).await?.is_some());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": patch.into_set_document() })
            .await
            .map_err(map_write_error)?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
