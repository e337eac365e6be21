//! # 연습 기록 저장소
//!
//! 연습 기록을 생성, 수정, 조회하는 함수들입니다.
//!
//! ## 정렬 규칙
//! 새 기록은 맨 앞에 추가됩니다 (삽입 순서 기준 최신순).
//! 날짜 순서가 아니므로, 날짜로 정렬이 필요하면 호출하는 쪽에서 정렬합니다.

use super::{ensure_unique_ids, new_id};
use crate::error::AppError;
use crate::models::{PracticeInput, PracticeSession};

/// 메모리 내 연습 기록 컬렉션
#[derive(Debug, Clone, Default)]
pub struct PracticeStore {
    practices: Vec<PracticeSession>,
}

impl PracticeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 기록들로 저장소를 채웁니다. 순서는 그대로 유지합니다.
    ///
    /// ID가 겹치면 `AppError::Conflict`, 시간이나 강도가 범위를 벗어나면
    /// `AppError::Validation`을 반환합니다.
    pub fn from_records(practices: Vec<PracticeSession>) -> Result<Self, AppError> {
        ensure_unique_ids("practice", practices.iter().map(|p| p.id.as_str()))?;
        // try_for_each: 첫 번째 Err에서 멈추고 그 에러를 반환합니다
        practices.iter().try_for_each(PracticeSession::validate)?;
        Ok(Self { practices })
    }

    /// 새 기록을 만들어 맨 앞에 추가하고, 만든 기록을 반환합니다.
    ///
    /// 검증은 하지 않습니다. 호출하는 쪽(Journal)에서 미리 검증합니다.
    pub fn create(&mut self, input: PracticeInput) -> PracticeSession {
        let practice = PracticeSession::from_input(new_id(), input);
        // insert(0, ..): Vec의 맨 앞에 넣습니다
        self.practices.insert(0, practice.clone());
        practice
    }

    /// ID로 기록 하나를 조회합니다.
    pub fn get(&self, id: &str) -> Option<&PracticeSession> {
        self.practices.iter().find(|p| p.id == id)
    }

    /// ID가 같은 기록의 모든 필드를 교체합니다 (ID는 유지).
    ///
    /// ## 반환값
    /// - `Some(PracticeSession)`: 교체된 기록
    /// - `None`: 해당 ID가 없음 (컬렉션은 그대로)
    pub fn update(&mut self, id: &str, input: PracticeInput) -> Option<PracticeSession> {
        // iter_mut(): 가변 참조(&mut)로 순회하여 제자리에서 수정합니다
        let slot = self.practices.iter_mut().find(|p| p.id == id)?;
        *slot = PracticeSession::from_input(slot.id.clone(), input);
        Some(slot.clone())
    }

    /// 전체 기록 (삽입 기준 최신순)
    pub fn list(&self) -> &[PracticeSession] {
        &self.practices
    }

    pub fn len(&self) -> usize {
        self.practices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.practices.is_empty()
    }
}
