//! # 저장소 계층 (Data Access Layer)
//!
//! 연습 기록과 과제 컬렉션을 메모리에 보관하는 모듈입니다.
//! `Journal` 파사드(services/journal.rs)가 이 모듈의 함수를 호출합니다.
//!
//! 각 하위 모듈:
//! - `practices`: 연습 기록의 생성/수정/조회 (삭제 없음)
//! - `challenges`: 과제의 생성/상태 전환/삭제/조회
//!
//! 저장소는 "없음"을 `Option`/`bool`로 돌려줄 뿐 에러로 바꾸지 않습니다.
//! 에러 변환은 파사드의 몫입니다.

pub mod challenges;
pub mod practices;

pub use challenges::*;
pub use practices::*;

use crate::error::AppError;
use std::collections::HashSet;

/// 새 레코드 ID를 만듭니다 (UUIDv7).
///
/// UUIDv7은 시간 순으로 정렬되고, 여러 기기가 동시에 만들어도
/// 사실상 충돌하지 않습니다.
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// 기존 레코드 묶음의 ID가 모두 다른지 확인합니다.
pub(crate) fn ensure_unique_ids<'a>(
    entity: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        // insert()는 이미 있던 값이면 false를 반환합니다
        if !seen.insert(id) {
            return Err(AppError::Conflict(format!("duplicate {entity} id: {id}")));
        }
    }
    Ok(())
}
