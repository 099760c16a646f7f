//! 명령행 인자 정의와 실행 모드 분기.
//!
//! 바이너리는 인자 파싱과 로깅 초기화만 하고, 실제 분기는 [`execute`]가 담당합니다.
//! 수집기 생성 함수를 주입받으므로 실제 네트워크 없이 모드별 동작을 검증할 수 있습니다.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockvault_core::{ChunkSpec, FetchParameters, Group, Interval, LogConfig, LogFormat, Period};
use tracing::{error, info};

use crate::modules::write_report;
use crate::{Collector, CollectorConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "stockvault")]
#[command(about = "Batch historical stock price collector", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error). RUST_LOG가 우선합니다
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// 그룹별 출력 폴더의 상위 디렉토리 (STOCKVAULT_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// 동시 실행 워커 수 (STOCKVAULT_CONCURRENCY)
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// 실행 요약 문서 경로 (STOCKVAULT_REPORT_PATH)
    #[arg(long, global = true)]
    pub report_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 그룹 하나 수집 (sp500, hangseng, mag7, nasdaq100)
    Collect {
        /// 수집할 그룹
        #[arg(long)]
        group: Group,

        /// 처리할 청크 번호 (0부터)
        #[arg(long, requires = "total_chunks")]
        chunk_index: Option<usize>,

        /// 전체 청크 수
        #[arg(long, requires = "chunk_index")]
        total_chunks: Option<usize>,

        /// 간격 재지정 (예: 1d, 1h). 기본값은 그룹 설정
        #[arg(long)]
        interval: Option<Interval>,

        /// 기간 재지정 (max, 1y, 2024-01-01..2024-06-30). 기본값은 max
        #[arg(long)]
        period: Option<Period>,
    },

    /// 수집 없이 실행 요약 문서만 갱신
    Report,

    /// 모든 그룹을 순서대로 수집
    RunAll,
}

impl Cli {
    /// 환경 변수 기반 로그 설정에 CLI 옵션을 덮어씁니다.
    pub fn log_config(&self, mut base: LogConfig) -> LogConfig {
        if let Some(level) = &self.log_level {
            base.level = level.clone();
        }
        if let Some(format) = self.log_format {
            base = base.with_format(format);
        }
        base
    }

    /// 로드한 설정에 CLI 덮어쓰기를 적용합니다.
    ///
    /// `report` 모드는 요약 문서를 반드시 남겨야 하므로 설정 에러가 있으면
    /// 로그를 남기고 기본값으로 진행합니다. 수집 모드는 에러를 그대로 반환합니다.
    pub fn resolve_config(&self, loaded: Result<CollectorConfig>) -> Result<CollectorConfig> {
        let base = match loaded {
            Ok(config) => config,
            Err(e) if matches!(self.command, Commands::Report) => {
                error!(error = %e, "설정 로드 실패, 기본 설정으로 요약 문서를 작성합니다");
                CollectorConfig::default()
            }
            Err(e) => return Err(e),
        };

        Ok(base.with_overrides(
            self.data_dir.clone(),
            self.concurrency,
            self.report_path.clone(),
        ))
    }
}

/// 실행 모드를 분기합니다.
///
/// `build`는 수집 모드에서만 호출됩니다. 잘못된 청크 지정은 작업 전에 거부되고,
/// 그 외에는 수집기 생성에 실패해도 요약 문서를 쓴 뒤 에러를 반환합니다.
pub async fn execute<F>(command: Commands, config: &CollectorConfig, build: F) -> Result<()>
where
    F: FnOnce(&CollectorConfig) -> Result<Collector>,
{
    match command {
        Commands::Collect {
            group,
            chunk_index,
            total_chunks,
            interval,
            period,
        } => {
            let chunk = ChunkSpec::from_options(chunk_index, total_chunks)?;
            let collector = build_or_report(config, build).await?;

            let defaults = group.fetch_parameters();
            let params = FetchParameters::new(
                period.unwrap_or(defaults.period),
                interval.unwrap_or(defaults.interval),
            );

            let summary = collector.collect_group_with(group, chunk, params).await;
            write_report(&config.report_path, &[summary]).await;
        }
        Commands::Report => {
            info!("요약 문서만 갱신합니다");
            write_report(&config.report_path, &[]).await;
        }
        Commands::RunAll => {
            let collector = build_or_report(config, build).await?;
            let summaries = collector.run_all().await;
            write_report(&config.report_path, &summaries).await;
        }
    }

    Ok(())
}

async fn build_or_report<F>(config: &CollectorConfig, build: F) -> Result<Collector>
where
    F: FnOnce(&CollectorConfig) -> Result<Collector>,
{
    match build(config) {
        Ok(collector) => Ok(collector),
        Err(e) => {
            error!(error = %e, "수집기 초기화 실패");
            write_report(&config.report_path, &[]).await;
            Err(e)
        }
    }
}
