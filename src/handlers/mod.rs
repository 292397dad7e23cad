//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크 기반의 얇은 어댑터로, 입력 추출 → 서비스 호출 → 응답 매핑만 담당합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - 사용자 존재 확인                ← Web Layer
//!   Handlers (이 모듈) - 검증, 이메일 가드, 해싱
//! ├─────────────────────────────────────────────┤
//!   Services - 저장소 위임                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (UserDao)          ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문을 결정합니다.

pub mod users;
