//! 청크 분할 속성 테스트
//!
//! 어떤 목록 길이와 청크 수에서도 청크를 순서대로 이어 붙이면
//! 원래 목록과 같아야 하고, 같은 입력은 항상 같은 구간을 돌려줘야 합니다.

use proptest::prelude::*;
use stockvault_core::{select_chunk, ChunkSpec, Symbol};

fn symbols(n: usize) -> Vec<Symbol> {
    (0..n)
        .map(|i| Symbol::new(format!("SYM{}", i)).unwrap())
        .collect()
}

proptest! {
    /// 모든 청크를 이어 붙이면 누락/중복 없이 원래 목록이 됩니다.
    #[test]
    fn chunks_cover_list_exactly_once(n in 0usize..600, total in 1usize..40) {
        let list = symbols(n);
        let mut joined = Vec::with_capacity(n);
        for index in 0..total {
            let spec = ChunkSpec::new(index, total).unwrap();
            joined.extend_from_slice(spec.partition(&list));
        }
        prop_assert_eq!(joined, list);
    }

    /// 각 청크 크기는 ceil(n / total) 이하입니다.
    #[test]
    fn chunk_never_exceeds_chunk_size(n in 0usize..600, total in 1usize..40) {
        let list = symbols(n);
        let size = n.div_ceil(total);
        for index in 0..total {
            let spec = ChunkSpec::new(index, total).unwrap();
            prop_assert!(spec.partition(&list).len() <= size);
        }
    }

    /// 같은 입력은 같은 구간을 반환합니다.
    #[test]
    fn partition_is_deterministic(n in 0usize..600, total in 1usize..40, seed in 0usize..1000) {
        let list = symbols(n);
        let spec = ChunkSpec::new(seed % total, total).unwrap();
        let first = spec.partition(&list).to_vec();
        let second = spec.partition(&list.clone()).to_vec();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_sp500_scenario() {
    let list = symbols(503);

    let chunk0 = select_chunk(&list, Some(ChunkSpec::new(0, 10).unwrap()));
    assert_eq!(chunk0.len(), 51);
    assert_eq!(chunk0.first().unwrap().as_str(), "SYM0");
    assert_eq!(chunk0.last().unwrap().as_str(), "SYM50");

    let chunk9 = select_chunk(&list, Some(ChunkSpec::new(9, 10).unwrap()));
    assert_eq!(chunk9.len(), 44);
    assert_eq!(chunk9.first().unwrap().as_str(), "SYM459");
    assert_eq!(chunk9.last().unwrap().as_str(), "SYM502");

    assert_eq!(select_chunk(&list, None).len(), 503);
}
