//! # Domain Models Module
//!
//! 영속성 엔티티와 구별되는, 요청 처리 과정에서만 사용되는 도메인 모델을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **예시**: `User`
//!
//! ### Models (`./`)
//! - **요청 컨텍스트**: 미들웨어가 만들어 Request Extensions에 저장하고 핸들러가 꺼내 쓰는 값
//! - **예시**: `ExistingUser`

pub mod users;

pub use users::*;
