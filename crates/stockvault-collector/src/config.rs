//! 환경변수 기반 설정 모듈.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::CollectorError;
use crate::Result;

/// 기본 동시 실행 워커 수.
pub const DEFAULT_CONCURRENCY: usize = 32;

/// Collector 전체 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// 그룹별 출력 폴더의 상위 디렉토리
    pub data_dir: PathBuf,
    /// 동시 실행 워커 상한 (1 이상)
    pub concurrency: usize,
    /// 실행 요약 문서 경로
    pub report_path: PathBuf,
    /// HTTP 요청 타임아웃 (초)
    pub request_timeout_secs: u64,
    /// 임시 파일 + rename으로 아티팩트 저장
    pub atomic_writes: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            concurrency: DEFAULT_CONCURRENCY,
            report_path: PathBuf::from("README.md"),
            request_timeout_secs: 30,
            atomic_writes: false,
        }
    }
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드 (`.env` 포함)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정을 만듭니다.
    ///
    /// 파싱에 실패한 값은 기본값으로 대체됩니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("STOCKVAULT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let report_path = lookup("STOCKVAULT_REPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.report_path);

        if data_dir.as_os_str().is_empty() {
            return Err(CollectorError::Config(
                "STOCKVAULT_DATA_DIR가 비어 있습니다".to_string(),
            ));
        }
        if report_path.as_os_str().is_empty() {
            return Err(CollectorError::Config(
                "STOCKVAULT_REPORT_PATH가 비어 있습니다".to_string(),
            ));
        }

        Ok(Self {
            data_dir,
            report_path,
            concurrency: env_var_parse(&lookup, "STOCKVAULT_CONCURRENCY", defaults.concurrency)
                .max(1),
            request_timeout_secs: env_var_parse(
                &lookup,
                "STOCKVAULT_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            atomic_writes: env_var_bool(&lookup, "STOCKVAULT_ATOMIC_WRITES", defaults.atomic_writes),
        })
    }

    /// CLI 인자로 덮어쓰기. `None`인 항목은 유지됩니다.
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        concurrency: Option<usize>,
        report_path: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(n) = concurrency {
            self.concurrency = n.max(1);
        }
        if let Some(path) = report_path {
            self.report_path = path;
        }
        self
    }

    /// HTTP 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// bool 값 파싱
fn env_var_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}
