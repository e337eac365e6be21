//! # Keiko — 무술 연습 일지
//!
//! 연습(稽古) 기록과 스스로 정한 과제를 관리하고,
//! 연속 연습일, 월간 달력, 월별 이력 같은 파생 값을 계산하는 라이브러리입니다.
//!
//! 모듈 구성:
//! - `config`: 환경변수 설정
//! - `error`: 에러 타입
//! - `models`: 데이터 구조체
//! - `store`: 메모리 내 저장소
//! - `services`: 통계/달력 계산과 `Journal` 파사드
//!
//! 화면 전환, 폼 입력, 인증은 이 크레이트 밖(UI 계층)의 책임입니다.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::AppError;
pub use services::Journal;
