//! StockVault 수집 CLI.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use stockvault_collector::cli::{execute, Cli};
use stockvault_collector::{Collector, CollectorConfig, CollectorError};
use stockvault_core::{init_logging, LogConfig};

/// 잘못된 인자/설정 종료 코드 (clap 사용법 에러와 동일)
const EXIT_INVOCATION: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let invocation = err
                .downcast_ref::<CollectorError>()
                .is_some_and(CollectorError::is_invocation_error);
            if invocation {
                ExitCode::from(EXIT_INVOCATION)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // 로깅 초기화 (프로세스당 한 번)
    init_logging(cli.log_config(LogConfig::from_env()))
        .map_err(|e| anyhow::anyhow!(e))
        .context("로깅 초기화 실패")?;

    tracing::info!("StockVault Collector 시작");

    let config = cli
        .resolve_config(CollectorConfig::from_env())
        .context("설정 로드 실패")?;
    tracing::debug!(?config, "설정 로드 완료");

    execute(cli.command, &config, Collector::from_config)
        .await
        .context("수집 실행 실패")?;

    tracing::info!("StockVault Collector 종료");
    Ok(())
}
