//! # 선택 목록(Catalog) 서비스
//!
//! 기록 화면의 "장소 선택", "기술 선택", "지도자 선택"에 쓰는 후보 목록을
//! 지금까지의 연습 기록에서 뽑아냅니다.

use crate::models::PracticeSession;
use std::collections::HashSet;

/// 지금까지 기록된 장소 (중복 제거, 처음 나온 순서)
pub fn locations(practices: &[PracticeSession]) -> Vec<String> {
    distinct(practices.iter().map(|p| p.location.as_str()))
}

/// 지금까지 기록된 지도자
pub fn instructors(practices: &[PracticeSession]) -> Vec<String> {
    // filter_map + as_deref: Option<String>에서 값이 있는 것만 &str로 꺼냅니다
    distinct(practices.iter().filter_map(|p| p.instructor.as_deref()))
}

/// 지금까지 기록된 기술
pub fn techniques(practices: &[PracticeSession]) -> Vec<String> {
    // flat_map: 각 기록의 기술 목록을 하나의 이터레이터로 펼칩니다
    distinct(
        practices
            .iter()
            .flat_map(|p| p.techniques.iter().map(String::as_str)),
    )
}

/// 검색어로 후보를 거릅니다 (대소문자 무시, 부분 일치).
///
/// 검색어가 비어 있으면 전체를 반환합니다.
pub fn filter_items<'a>(items: &'a [String], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return items.iter().map(String::as_str).collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

/// 새 후보로 직접 입력한 이름을 정리합니다. 공백뿐이면 None.
pub fn normalize_new_item(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// 빈 문자열을 빼고, 처음 나온 순서를 유지하며 중복을 없앱니다.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
