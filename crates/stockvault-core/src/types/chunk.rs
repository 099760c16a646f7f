//! 매트릭스 작업용 청크 분할.
//!
//! 외부 스케줄러가 `(chunk_index, total_chunks)`를 전달하면 심볼 목록을
//! 거의 같은 크기의 연속 구간으로 나누고 해당 구간만 처리합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// 청크 지정. `index < total`이 항상 성립합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpec {
    index: usize,
    total: usize,
}

impl ChunkSpec {
    /// 검증된 청크 지정을 생성합니다.
    pub fn new(index: usize, total: usize) -> CoreResult<Self> {
        if total == 0 {
            return Err(CoreError::ZeroChunks);
        }
        if index >= total {
            return Err(CoreError::ChunkOutOfRange { index, total });
        }
        Ok(Self { index, total })
    }

    /// CLI 옵션에서 청크 지정을 만듭니다.
    ///
    /// 둘 다 없으면 `None`(전체 목록 처리), 하나만 있으면 에러입니다.
    pub fn from_options(index: Option<usize>, total: Option<usize>) -> CoreResult<Option<Self>> {
        match (index, total) {
            (Some(index), Some(total)) => Self::new(index, total).map(Some),
            (None, None) => Ok(None),
            _ => Err(CoreError::IncompleteChunk),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 목록 길이에 대한 청크 크기 (`ceil(len / total)`).
    pub fn chunk_size(&self, len: usize) -> usize {
        len.div_ceil(self.total)
    }

    /// 이 청크가 담당하는 반개구간 `[start, end)`.
    ///
    /// 시작 위치가 목록 끝을 넘으면 빈 구간 `[len, len)`을 반환합니다.
    pub fn bounds(&self, len: usize) -> (usize, usize) {
        let size = self.chunk_size(len);
        let start = (self.index * size).min(len);
        let end = (start + size).min(len);
        (start, end)
    }

    /// 목록에서 이 청크에 해당하는 연속 구간을 반환합니다.
    pub fn partition<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds(items.len());
        &items[start..end]
    }
}

impl fmt::Display for ChunkSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.index + 1, self.total)
    }
}

/// 청크 지정이 있으면 해당 구간을, 없으면 전체 목록을 반환합니다.
pub fn select_chunk<T>(items: &[T], chunk: Option<ChunkSpec>) -> &[T] {
    match chunk {
        Some(spec) => spec.partition(items),
        None => items,
    }
}
