//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장된 엔티티를 클라이언트에게 안전한 형태로 전달합니다.
//!
//! - `UserResponse` - 단건 조회와 목록 조회에서 사용 (비밀번호 제외)
//! - `CreateUserResponse` - 생성 결과 `{ "id": ... }`
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "q3Jk1x_9aZbT",
//!   "email": "ana@example.com",
//!   "firstName": "Ana",
//!   "lastName": "Silva",
//!   "permissionFlags": 1
//! }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, UserResponse};
