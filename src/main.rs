//! # Keiko 실행 진입점
//!
//! 이 파일은 라이브러리를 실제로 띄워 보는 **시작점(entry point)**입니다.
//! UI 계층 대신 대시보드 스냅샷을 JSON으로 표준 출력에 씁니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. 일지(Journal) 생성 (필요하면 샘플 데이터 포함)
//! 5. 대시보드, 이번 달 달력, 월별 이력을 JSON으로 출력

use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use keiko::{models::YearMonth, Config, Journal};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .ok()는 Result를 Option으로 변환하여, .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // 로그는 표준 에러(stderr)로 보내 JSON 출력(stdout)과 섞이지 않게 합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keiko=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!(
        utc_offset = %config.utc_offset,
        seed_fixtures = config.seed_fixtures,
        "Starting keiko"
    );

    // ── 4단계: 일지 생성 ──
    let journal = Journal::from_config(&config)?;
    let today = journal.today();
    let month = YearMonth::from_date(today);

    // ── 5단계: 스냅샷 출력 ──
    let snapshot = json!({
        "today": today,
        "dashboard": journal.dashboard(),
        "calendar": {
            "month": month,
            "cells": journal.calendar_grid(month, Some(today)),
        },
        "history": journal.history(),
        "challenges": journal.list_challenges(),
    });
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
