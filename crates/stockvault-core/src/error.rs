//! 도메인 타입 검증 에러.

use thiserror::Error;

/// 핵심 도메인 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// 빈 심볼 문자열
    #[error("잘못된 심볼: 빈 문자열")]
    EmptySymbol,

    /// URL 경로나 파일명에 쓸 수 없는 문자가 포함된 심볼
    #[error("잘못된 심볼: {0}")]
    InvalidSymbol(String),

    /// 청크 인덱스가 범위를 벗어남
    #[error("잘못된 청크: index {index} >= total {total}")]
    ChunkOutOfRange { index: usize, total: usize },

    /// 총 청크 수가 0
    #[error("잘못된 청크: total_chunks는 1 이상이어야 합니다")]
    ZeroChunks,

    /// 청크 인덱스와 총 청크 수 중 하나만 지정됨
    #[error("chunk_index와 total_chunks는 함께 지정해야 합니다")]
    IncompleteChunk,

    /// 알 수 없는 그룹
    #[error("알 수 없는 그룹: {0}")]
    UnknownGroup(String),

    /// 알 수 없는 간격
    #[error("알 수 없는 간격: {0}")]
    UnknownInterval(String),

    /// 잘못된 기간
    #[error("잘못된 기간: {0}")]
    InvalidPeriod(String),
}

/// 도메인 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// 호출 인자(CLI/설정) 문제로 인한 에러인지 확인합니다.
    pub fn is_invocation_error(&self) -> bool {
        matches!(
            self,
            CoreError::ChunkOutOfRange { .. }
                | CoreError::ZeroChunks
                | CoreError::IncompleteChunk
                | CoreError::UnknownGroup(_)
                | CoreError::UnknownInterval(_)
                | CoreError::InvalidPeriod(_)
        )
    }
}
