//! 사용자 요청 처리 중 사용되는 도메인 모델

pub mod existing_user;

pub use existing_user::ExistingUser;
