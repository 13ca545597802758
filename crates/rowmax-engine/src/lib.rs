pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum BoardSizeError {
    #[display("invalid board size 0: must be at least 1")]
    Zero,
    #[display("invalid board size {size}: {size}x{size} cells do not fit in memory")]
    TooLarge { size: usize },
}

impl BoardSizeError {
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            BoardSizeError::Zero => 0,
            BoardSizeError::TooLarge { size } => *size,
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("game already finished: the board is full")]
pub struct GameFinishedError;
