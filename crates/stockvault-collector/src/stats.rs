//! 실행 통계 구조체.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stockvault_core::{ChunkSpec, FetchOutcome, Group, Symbol};

/// 그룹 하나의 배치 실행 결과 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// 대상 그룹
    pub group: Group,
    /// 처리한 청크 (없으면 전체 목록)
    pub chunk: Option<ChunkSpec>,
    /// 배치에 포함된 심볼 수
    pub total: usize,
    /// 저장 완료 수
    pub written: usize,
    /// 빈 데이터 (조회 성공, 데이터 없음)
    pub empty: usize,
    /// 실패 수
    pub failed: usize,
    /// 저장된 총 행 수
    pub total_rows: usize,
    /// 실패한 심볼 (입력 순서와 무관)
    pub failed_symbols: Vec<Symbol>,
    /// 소요 시간
    #[serde(skip)]
    pub elapsed: Duration,
    /// 요약 생성 시각 (UTC)
    pub generated_at: DateTime<Utc>,
}

impl RunSummary {
    /// 배치가 실행되지 않은 그룹의 빈 요약.
    pub fn empty(group: Group, chunk: Option<ChunkSpec>) -> Self {
        Self {
            group,
            chunk,
            total: 0,
            written: 0,
            empty: 0,
            failed: 0,
            total_rows: 0,
            failed_symbols: Vec::new(),
            elapsed: Duration::ZERO,
            generated_at: Utc::now(),
        }
    }

    /// 수집 결과를 집계합니다.
    pub fn from_outcomes(
        group: Group,
        chunk: Option<ChunkSpec>,
        outcomes: &[FetchOutcome],
        elapsed: Duration,
    ) -> Self {
        let mut summary = Self::empty(group, chunk);
        summary.elapsed = elapsed;

        for outcome in outcomes {
            summary.total += 1;
            match outcome {
                FetchOutcome::Written { rows, .. } => {
                    summary.written += 1;
                    summary.total_rows += rows;
                }
                FetchOutcome::EmptyResult { .. } => summary.empty += 1,
                FetchOutcome::Failed { symbol, .. } => {
                    summary.failed += 1;
                    summary.failed_symbols.push(symbol.clone());
                }
            }
        }

        summary.failed_symbols.sort();
        summary
    }

    /// 성공률 계산 (%)
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.written as f64 / self.total as f64) * 100.0
        }
    }

    /// 통계 요약 로그 출력
    pub fn log_summary(&self) {
        let chunk = self
            .chunk
            .map(|c| c.to_string())
            .unwrap_or_else(|| "all".to_string());

        tracing::info!(
            group = %self.group,
            chunk = %chunk,
            total = self.total,
            written = self.written,
            empty = self.empty,
            failed = self.failed,
            total_rows = self.total_rows,
            success_rate = format!("{:.1}%", self.success_rate()),
            elapsed = format!("{:.1}s", self.elapsed.as_secs_f64()),
            "수집 완료"
        );

        if !self.failed_symbols.is_empty() {
            let failed: Vec<&str> = self.failed_symbols.iter().map(|s| s.as_str()).collect();
            tracing::warn!(group = %self.group, failed = ?failed, "실패한 심볼");
        }
    }
}
