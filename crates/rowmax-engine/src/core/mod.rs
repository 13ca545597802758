pub use self::{board::*, mark::*, movegen::*};

pub(crate) mod board;
pub(crate) mod mark;
pub(crate) mod movegen;
