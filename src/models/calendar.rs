//! # 달력 관련 모델 정의
//!
//! 주간 표시, 월간 달력 그리드, 월별 이력 그룹에 쓰이는 뷰(view) 타입들입니다.
//! 모두 계산 결과를 담기만 하며, 계산은 `services::calendar`에서 합니다.
//!
//! ## 구조체 역할
//! - `YearMonth`: "2024-11" 같은 연-월 값 (월은 1부터 시작)
//! - `DayMarker`: 대시보드 주간 표시의 하루
//! - `CalendarCell` / `CalendarDay`: 월간 달력 그리드의 한 칸
//! - `MonthGroup`: 이력 화면의 월별 묶음
//! - `RelativeDay`: "今日", "昨日", "3日前" 같은 상대 날짜

use crate::error::AppError;
use crate::models::PracticeSession;
use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 달력 한 칸에 표시하는 연습 점(dot)의 최대 개수
pub const MAX_INDICATOR_DOTS: usize = 3;

/// 연-월 값
///
/// 내부적으로 그 달의 1일을 저장합니다. 항상 유효한 날짜이므로
/// 일수 계산이나 이전/다음 달 이동에서 잘못된 날짜가 나오지 않습니다.
///
/// 월은 1~12 입니다 (1월 = 1). 0부터 세는 방식이 아닙니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// 연도와 월(1~12)로 만듭니다.
    pub fn new(year: i32, month: u32) -> Result<Self, AppError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| {
                AppError::validation("month", format!("invalid year/month: {year}-{month}"))
            })
    }

    /// 날짜가 속한 달
    pub fn from_date(date: NaiveDate) -> Self {
        // day0(): 0부터 세는 일(日). 같은 달 안에서만 빼므로 넘치지 않습니다.
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// 그 달의 1일
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// 그 달의 일수 (28~31)
    ///
    /// 다음 달 1일과 이번 달 1일의 차이로 구합니다. 윤년은 chrono가 처리합니다.
    /// chrono가 표현하는 마지막 달(12월)은 다음 달이 없으므로 31일입니다.
    pub fn days_in_month(&self) -> u32 {
        match self.next() {
            Some(next) => next.first.signed_duration_since(self.first).num_days() as u32,
            None => 31,
        }
    }

    /// 다음 달. chrono가 표현할 수 있는 범위를 넘으면 None
    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// 이전 달
    pub fn prev(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
    }

    /// 날짜가 이 달에 속하는지
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// 그룹 키 — "2024-11" (월은 두 자리로 채움)
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// 화면 표시용 — "2024年11月"
    pub fn label(&self) -> String {
        format!("{}年{}月", self.year(), self.month())
    }
}

// Display: "{}"로 출력할 때의 형식. key()와 직렬화가 모두 이 형식을 씁니다.
impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// "2024-11" 형식의 문자열을 파싱합니다.
impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::validation("month", format!("expected YYYY-MM, got {s:?}"));
        // rsplit_once: 마지막 '-'를 기준으로 나눕니다
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// 대시보드 주간 표시의 하루 (일요일 ~ 토요일)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMarker {
    pub date: NaiveDate,
    /// 요일 머리글자 (S, M, T, W, T, F, S)
    pub weekday: &'static str,
    /// 일(日) 숫자
    pub day: u32,
    pub is_today: bool,
    /// 이 날짜에 연습 기록이 하나라도 있는지
    pub has_practice: bool,
    /// 기준일보다 뒤인지 (오늘은 미래가 아님)
    pub is_future: bool,
}

/// 월간 달력 그리드의 한 칸
///
/// 1일이 시작하는 요일 앞쪽은 빈 칸(Blank)으로 채웁니다.
/// #[serde(tag = "kind")]: JSON에서 `{ "kind": "blank" }` / `{ "kind": "day", ... }`로 구분
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    Blank,
    Day(CalendarDay),
}

impl CalendarCell {
    /// 날짜 칸이면 Some
    pub fn as_day(&self) -> Option<&CalendarDay> {
        match self {
            CalendarCell::Day(day) => Some(day),
            CalendarCell::Blank => None,
        }
    }
}

/// 달력 그리드의 날짜 칸
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub day: u32,
    /// 그날의 연습 기록 (저장소 순서)
    pub practices: Vec<PracticeSession>,
    pub is_selected: bool,
    pub is_today: bool,
    pub has_practice: bool,
    /// 표시할 점 개수 — 연습 수를 `MAX_INDICATOR_DOTS`로 자른 값
    pub indicator_count: usize,
}

/// 이력 화면의 월별 묶음
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    /// 직렬화하면 "2024-11"
    pub month: YearMonth,
    /// 날짜 내림차순으로 정렬된 기록
    pub practices: Vec<PracticeSession>,
}

/// 오늘을 기준으로 본 상대 날짜
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Yesterday,
    /// 2~6일 차이
    DaysAgo(u32),
    /// 7일 이상 차이
    On(NaiveDate),
}

impl RelativeDay {
    /// `date`와 `today`의 날짜 차이로 분류합니다.
    ///
    /// 차이는 절댓값으로 봅니다. 미래 날짜도 같은 규칙을 따릅니다.
    pub fn between(date: NaiveDate, today: NaiveDate) -> Self {
        let diff = today.signed_duration_since(date).num_days().unsigned_abs();
        match diff {
            0 => RelativeDay::Today,
            1 => RelativeDay::Yesterday,
            // try_from: u64 → u32 변환. 2..7 범위라 실패하지 않습니다
            2..=6 => RelativeDay::DaysAgo(u32::try_from(diff).unwrap_or(6)),
            _ => RelativeDay::On(date),
        }
    }

    /// 화면 표시용 문자열
    pub fn label(&self) -> String {
        match self {
            RelativeDay::Today => "今日".to_string(),
            RelativeDay::Yesterday => "昨日".to_string(),
            RelativeDay::DaysAgo(n) => format!("{n}日前"),
            RelativeDay::On(date) => format!("{}月{}日", date.month(), date.day()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn year_month_navigation_wraps_years() {
        let december = YearMonth::new(2024, 12).unwrap();
        let january = december.next().unwrap();
        assert_eq!((january.year(), january.month()), (2025, 1));
        assert_eq!(january.prev(), Some(december));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2024, 11).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2024, 12).unwrap().days_in_month(), 31);
        let last = YearMonth::from_date(NaiveDate::MAX);
        assert_eq!(last.days_in_month(), 31);
    }

    #[test]
    fn key_parse_and_label() {
        let month: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(month.key(), "2024-03");
        assert_eq!(month.label(), "2024年3月");
        assert_eq!(
            serde_json::to_value(month).unwrap(),
            serde_json::json!("2024-03")
        );
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("202403".parse::<YearMonth>().is_err());
        assert!(YearMonth::new(2024, 0).is_err());
    }

    #[test]
    fn from_date_is_first_of_month() {
        let month = YearMonth::from_date(date(2024, 11, 23));
        assert_eq!(month.first_day(), date(2024, 11, 1));
        assert!(month.contains(date(2024, 11, 30)));
        assert!(!month.contains(date(2023, 11, 30)));
    }

    #[test]
    fn relative_day_labels() {
        let today = date(2024, 11, 23);
        assert_eq!(RelativeDay::between(today, today).label(), "今日");
        assert_eq!(RelativeDay::between(date(2024, 11, 22), today).label(), "昨日");
        assert_eq!(
            RelativeDay::between(date(2024, 11, 20), today),
            RelativeDay::DaysAgo(3)
        );
        assert_eq!(RelativeDay::between(date(2024, 11, 1), today).label(), "11月1日");
    }
}
