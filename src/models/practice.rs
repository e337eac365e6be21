//! # 연습 기록 모델 정의
//!
//! 한 번의 연습(稽古)을 기록하는 데이터 구조체들을 정의합니다.
//! "언제, 어디서, 얼마나, 무엇을" 연습했는지를 남겨
//! 연속 연습일이나 월별 통계를 계산하는 데 활용됩니다.
//!
//! ## 기록 흐름
//! 1. 기록 화면에서 `PracticeInput`을 만들어 `Journal::create_practice`로 저장
//! 2. 수정 화면에서 같은 ID로 `Journal::update_practice` 호출 (ID 외 모든 필드 교체)
//! 3. 삭제 연산은 없습니다

use crate::error::AppError;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// 장소를 입력하지 않았을 때 저장되는 값 ("미설정")
pub const UNSET_LOCATION: &str = "未設定";

/// 입력하지 않았을 때의 기본 강도 (1~5 중 가운데)
pub const DEFAULT_INTENSITY: u8 = 3;

/// 연습 기록 엔티티 — 저장소(PracticeStore)의 한 항목에 대응합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeSession {
    /// 기록 고유 식별자 (UUIDv7). 생성 시 한 번 정해지고 바뀌지 않습니다.
    pub id: String,
    /// 연습한 시각 (ISO 8601, 예: "2024-11-23T19:00:00+09:00")
    /// 과거/미래 모두 가능하며, 오프셋까지 그대로 보존합니다.
    pub date: DateTime<FixedOffset>,
    /// 연습 시간(분)
    pub duration: i64,
    /// 연습 장소 — 비어 있으면 `UNSET_LOCATION`
    pub location: String,
    /// 지도자 이름 (선택)
    pub instructor: Option<String>,
    /// 강도 1~5
    pub intensity: u8,
    /// 메모 (선택)
    pub notes: Option<String>,
    /// 연습한 기술 목록 (순서 유지)
    pub techniques: Vec<String>,
    /// 관련 과제 제목 목록
    /// 과제 ID가 아니라 제목 문자열이므로 과제를 지워도 그대로 남습니다.
    pub challenges: Vec<String>,
    /// 스파링 라운드 수 (선택)
    pub sparring_rounds: Option<u32>,
}

impl PracticeSession {
    /// 입력값과 ID로 기록을 만듭니다.
    pub fn from_input(id: String, input: PracticeInput) -> Self {
        Self {
            id,
            date: input.date,
            duration: input.duration,
            location: input.location,
            instructor: input.instructor,
            intensity: input.intensity,
            notes: input.notes,
            techniques: input.techniques,
            challenges: input.challenges,
            sparring_rounds: input.sparring_rounds,
        }
    }

    /// 이 기록이 속한 달력상의 날짜
    ///
    /// 기록된 오프셋 기준의 날짜입니다. "+09:00"으로 23일 01시에 기록했다면
    /// UTC로는 22일이지만 23일로 취급합니다.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// 저장된 기록이 입력 검증과 같은 조건(시간 0 이상, 강도 1~5)을 만족하는지 확인합니다.
    ///
    /// 외부에서 불러온 기록으로 저장소를 채울 때 사용합니다.
    pub fn validate(&self) -> Result<(), AppError> {
        check_fields(self.duration, self.intensity)
    }
}

/// 연습 기록 생성/수정 요청 — ID를 제외한 모든 필드
///
/// 수정(update)도 부분 업데이트가 아니라 전체 교체이므로
/// 같은 구조체를 그대로 사용합니다.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PracticeInput {
    pub date: DateTime<FixedOffset>,
    pub duration: i64,
    /// 없으면 빈 문자열 → 저장할 때 `UNSET_LOCATION`으로 바뀜
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub instructor: Option<String>,
    /// #[serde(default = "...")]: JSON에 필드가 없으면 함수의 반환값을 사용
    #[serde(default = "default_intensity")]
    pub intensity: u8,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub sparring_rounds: Option<u32>,
}

fn default_intensity() -> u8 {
    DEFAULT_INTENSITY
}

impl PracticeInput {
    /// 날짜와 시간만 정한 입력값을 만듭니다. 나머지는 기본값입니다.
    pub fn new(date: DateTime<FixedOffset>, duration: i64) -> Self {
        Self {
            date,
            duration,
            location: String::new(),
            instructor: None,
            intensity: DEFAULT_INTENSITY,
            notes: None,
            techniques: Vec::new(),
            challenges: Vec::new(),
            sparring_rounds: None,
        }
    }

    /// 입력값을 검증합니다.
    ///
    /// - `duration`: 0 이상
    /// - `intensity`: 1~5
    pub fn validate(&self) -> Result<(), AppError> {
        check_fields(self.duration, self.intensity)
    }

    /// 저장 전에 빈 값을 정리합니다.
    ///
    /// - 공백뿐인 장소 → `UNSET_LOCATION`
    /// - 공백뿐인 지도자/메모 → None
    pub fn normalized(mut self) -> Self {
        if self.location.trim().is_empty() {
            self.location = UNSET_LOCATION.to_string();
        }
        // Option::filter: 조건을 만족하지 않으면 None으로 바꿉니다
        self.instructor = self.instructor.filter(|s| !s.trim().is_empty());
        self.notes = self.notes.filter(|s| !s.trim().is_empty());
        self
    }
}

fn check_fields(duration: i64, intensity: u8) -> Result<(), AppError> {
    if duration < 0 {
        return Err(AppError::validation(
            "duration",
            format!("must be zero or more minutes, got {duration}"),
        ));
    }
    if !(1..=5).contains(&intensity) {
        return Err(AppError::validation(
            "intensity",
            format!("must be between 1 and 5, got {intensity}"),
        ));
    }
    Ok(())
}
