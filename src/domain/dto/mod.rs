//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티([`User`](crate::domain::entities::users::User))와 분리되어 있어
//! 저장 형태(`_id`, 비밀번호 해시)가 HTTP 응답으로 새어 나가지 않습니다.
//!
//! | 역할 | 도구 |
//! |------|------|
//! | 요청 본문 매핑 | `request` 모듈 + `serde` |
//! | 응답 본문 매핑 | `response` 모듈 + `serde` |
//! | 입력값 검증 | `validator` crate |
//! | JSON 필드 이름 | `#[serde(rename_all = "camelCase")]` |
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/
//!     └── response/
//! ```

pub mod users;

pub use users::*;
