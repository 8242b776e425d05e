// Utils compartidos

pub mod constants;
pub mod optimistic;
pub mod storage;

pub use constants::*;
pub use optimistic::OptimisticUpdate;
pub use storage::*;
