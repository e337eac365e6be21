//! # 달력 계산 서비스
//!
//! 연습 기록을 날짜별로 묶어 달력 화면에 필요한 값을 만듭니다.
//!
//! 이 모듈의 함수들:
//! - `week_view()`: 기준일이 속한 주(일~토)의 7일 표시
//! - `calendar_grid()`: 월간 달력 그리드 (앞쪽 빈 칸 + 날짜 칸)
//! - `practices_on()`: 특정 날짜의 기록 (선택한 날 상세)
//! - `practices_in_month()`: 특정 달의 기록 (리스트 보기)
//! - `group_by_month()`: 이력 화면용 월별 묶음
//!
//! 날짜 비교는 모두 `PracticeSession::day()` (기록된 오프셋 기준 날짜)로 합니다.

use crate::models::{
    CalendarCell, CalendarDay, DayMarker, MonthGroup, PracticeSession, YearMonth,
    MAX_INDICATOR_DOTS,
};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;

/// 일요일부터 시작하는 요일 머리글자
const WEEKDAY_INITIALS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// 기준일이 속한 주의 7일(일요일 ~ 토요일)을 계산합니다.
///
/// 각 날짜마다 오늘인지, 연습 기록이 있는지, 미래인지를 표시합니다.
/// `reference`가 곧 "오늘"입니다.
pub fn week_view(practices: &[PracticeSession], reference: NaiveDate) -> Vec<DayMarker> {
    // num_days_from_sunday(): 일요일 = 0, 토요일 = 6
    let offset = reference.weekday().num_days_from_sunday();
    let sunday = reference - Days::new(u64::from(offset));

    // iter_days(): 하루씩 증가하는 날짜 이터레이터
    sunday
        .iter_days()
        .take(7)
        .zip(WEEKDAY_INITIALS)
        .map(|(date, weekday)| DayMarker {
            date,
            weekday,
            day: date.day(),
            is_today: date == reference,
            has_practice: practices.iter().any(|p| p.day() == date),
            is_future: date > reference,
        })
        .collect()
}

/// 특정 날짜의 연습 기록 (저장소 순서 그대로)
pub fn practices_on(practices: &[PracticeSession], date: NaiveDate) -> Vec<PracticeSession> {
    practices
        .iter()
        .filter(|p| p.day() == date)
        .cloned()
        .collect()
}

/// 월간 달력 그리드를 만듭니다.
///
/// ## 결과 구성
/// - 앞쪽 빈 칸: 1일의 요일 인덱스만큼 (일요일 = 0)
/// - 날짜 칸: 1일 ~ 말일, 각 칸에 그날의 기록과 표시 플래그
///
/// 예: 2024년 11월 1일은 금요일(5)이므로 빈 칸 5개 + 날짜 칸 30개
pub fn calendar_grid(
    practices: &[PracticeSession],
    month: YearMonth,
    today: NaiveDate,
    selected: Option<NaiveDate>,
) -> Vec<CalendarCell> {
    let first = month.first_day();
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = month.days_in_month() as usize;

    let mut cells = Vec::with_capacity(leading + days);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(leading));

    for date in first.iter_days().take(days) {
        let day_practices = practices_on(practices, date);
        let count = day_practices.len();
        cells.push(CalendarCell::Day(CalendarDay {
            date,
            day: date.day(),
            practices: day_practices,
            is_selected: selected == Some(date),
            is_today: date == today,
            has_practice: count > 0,
            indicator_count: count.min(MAX_INDICATOR_DOTS),
        }));
    }

    cells
}

/// 특정 달의 기록을 날짜 내림차순으로 반환합니다 (리스트 보기).
pub fn practices_in_month(practices: &[PracticeSession], month: YearMonth) -> Vec<PracticeSession> {
    let mut selected: Vec<PracticeSession> = practices
        .iter()
        .filter(|p| month.contains(p.day()))
        .cloned()
        .collect();
    sort_newest_first(&mut selected);
    selected
}

/// 기록을 날짜 내림차순으로 정렬한 뒤 "YYYY-MM" 월별로 묶습니다.
///
/// 묶음도 최신 달이 먼저 오도록 내림차순입니다.
pub fn group_by_month(practices: &[PracticeSession]) -> Vec<MonthGroup> {
    let mut sorted = practices.to_vec();
    sort_newest_first(&mut sorted);

    // BTreeMap: 키 순서로 정렬되는 맵. 마지막에 rev()로 내림차순을 만듭니다
    let mut buckets: BTreeMap<YearMonth, Vec<PracticeSession>> = BTreeMap::new();
    for practice in sorted {
        buckets
            .entry(YearMonth::from_date(practice.day()))
            .or_default()
            .push(practice);
    }

    buckets
        .into_iter()
        .rev()
        .map(|(month, practices)| MonthGroup { month, practices })
        .collect()
}

/// 날짜 내림차순 정렬
///
/// sort_by는 안정 정렬이므로 같은 시각의 기록은 원래 순서를 유지합니다.
fn sort_newest_first(practices: &mut [PracticeSession]) {
    practices.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PracticeInput;
    use chrono::DateTime;
    use pretty_assertions::assert_eq;

    fn practice(id: &str, date: &str) -> PracticeSession {
        let date = DateTime::parse_from_rfc3339(date).unwrap();
        PracticeSession::from_input(id.to_string(), PracticeInput::new(date, 60))
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<PracticeSession> {
        vec![
            practice("1", "2024-11-23T19:00:00Z"),
            practice("2", "2024-11-21T18:30:00Z"),
            practice("3", "2024-11-20T10:00:00Z"),
        ]
    }

    #[test]
    fn week_view_runs_sunday_to_saturday() {
        // 2024-11-21은 목요일
        let week = week_view(&sample(), day(2024, 11, 21));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, day(2024, 11, 17));
        assert_eq!(week[6].date, day(2024, 11, 23));

        let weekdays: Vec<&str> = week.iter().map(|d| d.weekday).collect();
        assert_eq!(weekdays, vec!["S", "M", "T", "W", "T", "F", "S"]);

        let today: Vec<bool> = week.iter().map(|d| d.is_today).collect();
        assert_eq!(today, vec![false, false, false, false, true, false, false]);

        let practiced: Vec<bool> = week.iter().map(|d| d.has_practice).collect();
        assert_eq!(practiced, vec![false, false, false, true, true, false, true]);

        let future: Vec<bool> = week.iter().map(|d| d.is_future).collect();
        assert_eq!(future, vec![false, false, false, false, false, true, true]);
    }

    #[test]
    fn week_view_on_sunday_starts_today() {
        let week = week_view(&[], day(2024, 11, 24));
        assert_eq!(week[0].date, day(2024, 11, 24));
        assert!(week[0].is_today);
        assert!(week[1..].iter().all(|d| d.is_future));
    }

    #[test]
    fn november_2024_grid_has_five_blanks_and_thirty_days() {
        let month = YearMonth::new(2024, 11).unwrap();
        let grid = calendar_grid(&sample(), month, day(2024, 11, 23), Some(day(2024, 11, 21)));

        let blanks = grid.iter().take_while(|c| c.as_day().is_none()).count();
        assert_eq!(blanks, 5);
        let days: Vec<&CalendarDay> = grid.iter().filter_map(CalendarCell::as_day).collect();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].day, 1);
        assert_eq!(days[29].day, 30);

        let selected = days[20];
        assert!(selected.is_selected);
        assert!(selected.has_practice);
        assert_eq!(selected.practices[0].id, "2");

        let today = days[22];
        assert!(today.is_today && !today.is_selected);
        assert_eq!(days.iter().filter(|d| d.has_practice).count(), 3);
    }

    #[test]
    fn grid_caps_indicator_dots() {
        let busy: Vec<PracticeSession> = (0..5)
            .map(|i| practice(&i.to_string(), &format!("2024-09-01T0{i}:00:00Z")))
            .collect();
        // 2024-09-01은 일요일이므로 빈 칸이 없습니다
        let grid = calendar_grid(&busy, YearMonth::new(2024, 9).unwrap(), day(2024, 9, 2), None);
        let first = grid[0].as_day().unwrap();
        assert_eq!(first.practices.len(), 5);
        assert_eq!(first.indicator_count, MAX_INDICATOR_DOTS);
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn group_by_month_orders_keys_and_entries_descending() {
        let mut practices = sample();
        practices.push(practice("4", "2024-10-05T10:00:00Z"));
        practices.insert(0, practice("5", "2023-12-31T10:00:00Z"));

        let groups = group_by_month(&practices);
        let keys: Vec<String> = groups.iter().map(|g| g.month.key()).collect();
        assert_eq!(keys, vec!["2024-11", "2024-10", "2023-12"]);

        let november: Vec<&str> = groups[0].practices.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(november, vec!["1", "2", "3"]);
    }

    #[test]
    fn group_by_month_single_bucket() {
        let groups = group_by_month(&sample());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].month.key(), "2024-11");
        assert_eq!(groups[0].practices.len(), 3);
    }

    #[test]
    fn month_list_and_day_filter() {
        let mut practices = sample();
        practices.push(practice("4", "2024-10-05T10:00:00Z"));
        practices.insert(0, practice("6", "2024-11-20T07:00:00Z"));

        let november = practices_in_month(&practices, YearMonth::new(2024, 11).unwrap());
        let ids: Vec<&str> = november.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "6"]);

        let on_20th = practices_on(&practices, day(2024, 11, 20));
        let ids: Vec<&str> = on_20th.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["6", "3"]);
        assert!(practices_on(&practices, day(2024, 11, 22)).is_empty());
    }
}
