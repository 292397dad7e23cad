//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserDao`] trait과 두 가지 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserDao};
//!
//! let repo = MongoUserRepository::new(&database);
//! repo.create_indexes().await?;
//! let user = repo.find_by_email("user@example.com").await?;
//! ```

pub mod memory_user_repo;
pub mod mongo_user_repo;
pub mod user_repo;

pub use memory_user_repo::InMemoryUserRepository;
pub use mongo_user_repo::MongoUserRepository;
pub use user_repo::UserDao;
