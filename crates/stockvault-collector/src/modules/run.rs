//! 그룹 수집 워크플로우.
//!
//! 그룹 해석 → 청크 선택 → 출력 폴더 준비 → 배치 수집 → 요약.
//! 모든 그룹이 같은 흐름을 공유하고, 그룹별 차이는 데이터(심볼 소스,
//! 폴더 이름, 조회 파라미터)로만 표현됩니다.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use stockvault_core::{select_chunk, ChunkSpec, FetchParameters, Group};
use stockvault_data::{CsvArtifactWriter, GroupResolver, YahooChartProvider};
use tracing::{error, info, warn};

use super::batch::BatchRunner;
use crate::{CollectorConfig, Result, RunSummary};

/// 그룹 단위 수집기.
#[derive(Clone)]
pub struct Collector {
    resolver: GroupResolver,
    runner: BatchRunner,
    data_dir: PathBuf,
}

impl Collector {
    pub fn new(resolver: GroupResolver, runner: BatchRunner, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            runner,
            data_dir: data_dir.into(),
        }
    }

    /// 설정으로부터 실제 소스(Yahoo, Wikipedia)를 사용하는 수집기를 만듭니다.
    pub fn from_config(config: &CollectorConfig) -> Result<Self> {
        let timeout = config.request_timeout();
        let provider = YahooChartProvider::new(timeout)?;
        let resolver = GroupResolver::standard(timeout)?;
        let runner = BatchRunner::new(Arc::new(provider))
            .with_concurrency(config.concurrency)
            .with_writer(CsvArtifactWriter::new().atomic(config.atomic_writes));

        Ok(Self::new(resolver, runner, config.data_dir.clone()))
    }

    /// 그룹의 출력 폴더.
    pub fn group_folder(&self, group: Group) -> PathBuf {
        self.data_dir.join(group.folder_name())
    }

    /// 그룹 하나를 수집합니다.
    ///
    /// 심볼 목록을 얻지 못했거나 출력 폴더를 만들 수 없으면 배치를 건너뛰고
    /// 빈 요약을 반환합니다. 심볼 단위 실패는 요약의 `failed`로만 나타납니다.
    pub async fn collect_group(&self, group: Group, chunk: Option<ChunkSpec>) -> RunSummary {
        self.collect_group_with(group, chunk, group.fetch_parameters()).await
    }

    /// 그룹 기본값 대신 지정한 조회 파라미터로 수집합니다.
    pub async fn collect_group_with(
        &self,
        group: Group,
        chunk: Option<ChunkSpec>,
        params: FetchParameters,
    ) -> RunSummary {
        let start = Instant::now();
        info!(
            group = %group,
            chunk = ?chunk.map(|c| c.to_string()),
            %params,
            "그룹 수집 시작"
        );

        let symbols = self.resolver.resolve(group).await;
        if symbols.is_empty() {
            warn!(group = %group, "심볼 목록이 비어 있어 배치를 건너뜁니다");
            return RunSummary::empty(group, chunk);
        }

        let selected = select_chunk(&symbols, chunk);
        if let Some(spec) = chunk {
            let (start_idx, end_idx) = spec.bounds(symbols.len());
            info!(
                group = %group,
                chunk = %spec,
                chunk_size = spec.chunk_size(symbols.len()),
                range = format!("[{}, {})", start_idx, end_idx),
                selected = selected.len(),
                "청크 선택"
            );
        }

        if selected.is_empty() {
            info!(group = %group, "선택된 청크가 비어 있습니다");
            return RunSummary::empty(group, chunk);
        }

        let folder = self.group_folder(group);
        if let Err(e) = tokio::fs::create_dir_all(&folder).await {
            error!(group = %group, folder = %folder.display(), error = %e, "출력 폴더 생성 실패");
            return RunSummary::empty(group, chunk);
        }

        let outcomes = self.runner.run(selected, &folder, &params).await;

        let summary = RunSummary::from_outcomes(group, chunk, &outcomes, start.elapsed());
        summary.log_summary();
        summary
    }

    /// 모든 그룹을 순서대로 수집합니다 (청크 없음).
    pub async fn run_all(&self) -> Vec<RunSummary> {
        info!("=== 전체 그룹 수집 시작 ===");

        let mut summaries = Vec::with_capacity(Group::ALL.len());
        for (idx, group) in Group::ALL.into_iter().enumerate() {
            info!("Step {}/{}: {}", idx + 1, Group::ALL.len(), group.display_name());
            summaries.push(self.collect_group(group, None).await);
        }

        info!("=== 전체 그룹 수집 완료 ===");
        summaries
    }
}
