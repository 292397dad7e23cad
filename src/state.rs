//! 애플리케이션 공유 상태
//!
//! 서버 시작 시 한 번 만들어 `web::Data`로 모든 워커에 공유합니다.
//! 핸들러는 `web::Data<AppState>` 추출자로, 미들웨어는 `req.app_data()`로 접근합니다.

use std::sync::Arc;

use crate::config::StorageBackend;
use crate::repositories::users::{InMemoryUserRepository, UserDao};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    /// 비밀번호 해싱에 사용하는 bcrypt cost
    pub bcrypt_cost: u32,
    /// 헬스 체크 응답에 표시되는 저장소 종류
    pub storage: StorageBackend,
}

impl AppState {
    pub fn new(dao: Arc<dyn UserDao>, bcrypt_cost: u32, storage: StorageBackend) -> Self {
        Self {
            user_service: Arc::new(UserService::new(dao)),
            bcrypt_cost,
            storage,
        }
    }

    /// 인메모리 저장소를 사용하는 상태를 만듭니다.
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            bcrypt_cost,
            StorageBackend::Memory,
        )
    }
}
