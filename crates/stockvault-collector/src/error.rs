//! 에러 타입 정의.

use stockvault_core::CoreError;
use stockvault_data::DataError;
use thiserror::Error;

/// Collector 에러 타입.
///
/// 심볼 단위 실패는 여기까지 올라오지 않고 `FetchOutcome::Failed`로 흡수됩니다.
/// 이 타입은 실행 자체를 시작할 수 없는 경우에만 사용됩니다.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// 설정 에러
    #[error("Configuration error: {0}")]
    Config(String),

    /// 잘못된 호출 인자 (그룹, 청크 등)
    #[error("Invalid invocation: {0}")]
    Core(#[from] CoreError),

    /// 데이터 소스 초기화 에러 (HTTP 클라이언트 등)
    #[error("Data source error: {0}")]
    DataSource(#[from] DataError),
}

impl CollectorError {
    /// 호출 인자나 설정 문제인지 확인합니다.
    ///
    /// 바이너리는 이 경우 사용법 에러 종료 코드(2)를 사용합니다.
    pub fn is_invocation_error(&self) -> bool {
        match self {
            CollectorError::Config(_) => true,
            CollectorError::Core(e) => e.is_invocation_error(),
            CollectorError::DataSource(_) => false,
        }
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, CollectorError>;
