//! 동시 수집 오케스트레이터.
//!
//! 심볼마다 워커 태스크를 하나씩 띄우고 세마포어로 동시 실행 수를 제한합니다.
//! 모든 태스크가 끝날 때까지 기다린 뒤 결과를 반환합니다 (완료 순서).
//! 워커 내부의 panic은 `JoinError`로 잡혀 해당 심볼의 `Failed`가 됩니다.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use stockvault_core::{FetchOutcome, FetchParameters, Symbol};
use stockvault_data::{CsvArtifactWriter, TimeSeriesProvider};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, Instrument};

use super::worker::fetch_one;
use crate::config::DEFAULT_CONCURRENCY;

/// 제한된 동시성으로 심볼 배치를 수집합니다.
#[derive(Clone)]
pub struct BatchRunner {
    provider: Arc<dyn TimeSeriesProvider>,
    writer: CsvArtifactWriter,
    concurrency: usize,
}

impl BatchRunner {
    pub fn new(provider: Arc<dyn TimeSeriesProvider>) -> Self {
        Self {
            provider,
            writer: CsvArtifactWriter::new(),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// 동시 실행 워커 상한 (최소 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_writer(mut self, writer: CsvArtifactWriter) -> Self {
        self.writer = writer;
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// 배치를 실행합니다.
    ///
    /// 입력 심볼마다 정확히 하나의 결과가 반환됩니다.
    /// 빈 목록이면 즉시 빈 결과를 반환합니다.
    pub async fn run(
        &self,
        symbols: &[Symbol],
        folder: &Path,
        params: &FetchParameters,
    ) -> Vec<FetchOutcome> {
        if symbols.is_empty() {
            info!("수집할 심볼이 없습니다");
            return Vec::new();
        }

        let start = Instant::now();
        let semaphore = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();
        let mut pending = HashMap::with_capacity(symbols.len());

        info!(
            symbols = symbols.len(),
            concurrency = self.concurrency,
            folder = %folder.display(),
            %params,
            "배치 수집 시작"
        );

        for symbol in symbols {
            let semaphore = Arc::clone(&semaphore);
            let provider = Arc::clone(&self.provider);
            let writer = self.writer;
            let folder: PathBuf = folder.to_path_buf();
            let params = params.clone();
            let task_symbol = symbol.clone();
            let span = info_span!("fetch", symbol = %symbol);

            let handle = tasks.spawn(
                async move {
                    // 슬롯이 날 때까지 대기
                    let _permit = match semaphore.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(e) => return FetchOutcome::failed(task_symbol, e),
                    };
                    fetch_one(provider.as_ref(), writer, task_symbol, &folder, &params).await
                }
                .instrument(span),
            );
            pending.insert(handle.id(), symbol.clone());
        }

        let mut outcomes = Vec::with_capacity(symbols.len());
        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((id, outcome)) => {
                    pending.remove(&id);
                    outcomes.push(outcome);
                }
                Err(e) => {
                    let Some(symbol) = pending.remove(&e.id()) else {
                        error!(error = %e, "알 수 없는 워커 태스크 종료");
                        continue;
                    };
                    error!(symbol = %symbol, error = %e, "워커 태스크 비정상 종료");
                    outcomes.push(FetchOutcome::failed(symbol, e));
                }
            }
        }

        info!(
            outcomes = outcomes.len(),
            elapsed = format!("{:.1}s", start.elapsed().as_secs_f64()),
            "배치 수집 종료"
        );
        outcomes
    }
}
