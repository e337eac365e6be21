//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `practice`: 연습 기록(PracticeSession)과 입력값
//! - `challenge`: 과제(Challenge)와 상태
//! - `calendar`: 주간/월간 달력과 월별 그룹 뷰
//! - `stats`: 대시보드 통계 뷰
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을
//! 이 모듈에서 바로 접근할 수 있게 재공개(re-export)합니다.
//! 예: `crate::models::practice::PracticeSession` 대신 `crate::models::PracticeSession`

pub mod calendar;
pub mod challenge;
pub mod practice;
pub mod stats;

pub use calendar::*;
pub use challenge::*;
pub use practice::*;
pub use stats::*;
