use thiserror::Error;

/// Errors reported by the checked constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("rank must be at least 1")]
    ZeroRank,
    #[error("rank {rank} is larger than the number of initial values ({len})")]
    RankOutOfRange {
        rank: usize,
        len: usize,
    },
}
