//! 미들웨어 모듈
//!
//! 사용자 라우트의 요청 처리 파이프라인에서 핸들러 앞단에 실행되는 검사들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 사용자 존재 확인 (UserExists)
//! - `{user_id}` 경로의 사용자를 조회하여 없으면 404로 단락
//! - 조회한 사용자를 request extension에 저장 (`ExistingUser` 추출자)
//!
//! ### 2. 이메일 가드 (email_guards)
//! - 요청 본문의 이메일이 다른 사용자에게 속해 있으면 409
//! - 본문 검증 이후에 실행되어야 하므로 핸들러 안에서 호출
//!
//! # 라우트별 실행 순서
//!
//! ```text
//! POST   /users            본문 검증 → ensure_email_available → 생성
//! GET    /users/{id}       UserExists → 조회
//! PUT    /users/{id}       UserExists → 본문 검증(전체 필수) → ensure_email_belongs_to → 교체
//! PATCH  /users/{id}       UserExists → 본문 검증(선택) → ensure_email_belongs_to(이메일 있을 때) → 병합
//! DELETE /users/{id}       UserExists → 삭제
//! ```

pub mod email_guards;
pub mod user_exists;
mod user_exists_inner;

pub use email_guards::{ensure_email_available, ensure_email_belongs_to};
pub use user_exists::UserExists;
