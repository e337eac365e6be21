//! # 서비스 모듈
//!
//! 저장소 위에서 동작하는 계산과 조합 로직을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `calendar`: 주간 표시, 월간 그리드, 월별 그룹
//! - `catalog`: 장소/지도자/기술 선택 목록
//! - `clock`: 시간 소스 추상화
//! - `fixtures`: 샘플 데이터
//! - `journal`: UI 계층이 사용하는 파사드
//! - `stats`: 대시보드 통계

pub mod calendar;
pub mod catalog;
pub mod clock;
pub mod fixtures;
pub mod journal;
pub mod stats;

pub use clock::*;
pub use journal::Journal;
