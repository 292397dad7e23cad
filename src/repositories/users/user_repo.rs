//! # 사용자 리포지토리 인터페이스
//!
//! 사용자 엔티티의 데이터 액세스 계층을 정의하는 trait입니다.
//! 서비스 계층은 이 trait에만 의존하며, 실제 저장소는 시작 시점에 선택됩니다.
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`](super::MongoUserRepository) | MongoDB `users` 컬렉션 | 운영 |
//! | [`InMemoryUserRepository`](super::InMemoryUserRepository) | 프로세스 메모리 | 로컬 실행, 테스트 |
//!
//! ## 에러 처리
//!
//! - **DatabaseError**: 저장소 연결 오류, 쿼리 실행 오류
//! - **ConflictError**: 이메일 유니크 제약 위반
//!
//! 존재하지 않는 ID는 에러가 아니라 `None`/`false`로 표현하고,
//! 404 변환은 서비스 계층이 담당합니다.

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::{NewUser, User, UserPatch, UserReplacement};

/// 사용자 데이터 액세스 trait
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let dao: Arc<dyn UserDao> = Arc::new(InMemoryUserRepository::new());
///
/// let id = dao.create(new_user).await?;
/// let found = dao.find_by_id(&id).await?;
/// let page = dao.list(10, 0).await?;
/// let deleted = dao.delete_by_id(&id).await?;
/// ```
#[async_trait]
pub trait UserDao: Send + Sync {
    /// 새 사용자를 저장하고 할당된 ID를 반환합니다.
    async fn create(&self, new_user: NewUser) -> AppResult<String>;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 정규화된 이메일로 사용자를 조회합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// `offset`개를 건너뛴 뒤 최대 `limit`개의 사용자를 반환합니다.
    async fn list(&self, limit: u64, offset: u64) -> AppResult<Vec<User>>;

    /// ID를 제외한 모든 필드를 교체합니다. 대상이 없으면 `false`.
    async fn replace_by_id(&self, id: &str, replacement: UserReplacement) -> AppResult<bool>;

    /// 패치에 포함된 필드만 병합합니다. 대상이 없으면 `false`.
    async fn merge_by_id(&self, id: &str, patch: UserPatch) -> AppResult<bool>;

    /// 사용자를 삭제합니다. 대상이 없으면 `false`.
    async fn delete_by_id(&self, id: &str) -> AppResult<bool>;
}
