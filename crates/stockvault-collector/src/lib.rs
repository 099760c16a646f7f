//! Batch stock price collector for StockVault.
//!
//! 이 crate는 그룹 단위 주가 수집 엔진과 바이너리를 제공합니다:
//! - 심볼별 수집 워커 (조회 → CSV 저장 → 결과 분류)
//! - 동시 실행 수가 제한된 배치 오케스트레이터
//! - 실행 통계와 Markdown 실행 요약 문서
//! - 환경변수 기반 설정
//! - CLI 인자 정의와 실행 모드 분기

pub mod cli;
pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{CollectorError, Result};
pub use modules::{BatchRunner, Collector};
pub use stats::RunSummary;
