//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체와 저장소 계층에 전달되는 입력 모델을 포함합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, NewUser, UserReplacement, UserPatch)
//! ├── models/       ← 요청 컨텍스트 모델 (ExistingUser)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **문서 형태 일치**: `_id`와 camelCase 필드명으로 직렬화되어 기존 컬렉션 스키마와 호환
//! - **비밀번호 비노출**: 엔티티는 HTTP 응답으로 직렬화하지 않고 항상 응답 DTO로 변환
//! - **허용 목록 병합**: 부분 수정은 `UserPatch`가 가진 필드로만 가능

pub mod users;

pub use users::*;
