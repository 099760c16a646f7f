//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 외부 데이터 소스 및 아티팩트 저장 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 네트워크/연결 오류
    #[error("Network error: {0}")]
    Network(String),

    /// 요청 타임아웃
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// HTTP 상태 코드 오류
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 제공자가 보고한 API 오류 (예: 존재하지 않는 심볼)
    #[error("Provider error {code}: {description}")]
    Api { code: String, description: String },

    /// 응답 파싱 오류
    #[error("Parse error: {0}")]
    Parse(String),

    /// 심볼 목록 테이블을 찾지 못함
    #[error("Symbol table not found: {0}")]
    TableNotFound(String),

    /// CSV 쓰기 오류
    #[error("CSV error: {0}")]
    Csv(String),

    /// 파일 입출력 오류
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 데이터 작업을 위한 Result 타입.
pub type DataResult<T> = Result<T, DataError>;

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DataError::Timeout(err.to_string())
        } else if err.is_decode() {
            DataError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            DataError::Http {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            DataError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::Csv(err.to_string())
    }
}
