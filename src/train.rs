//! Train representation: the tile pool, partial trains and scored search states

pub mod partial;
pub mod pool;
pub mod state;

pub use partial::{Anchor, PartialTrainState, Placement, TrainEdge};
pub use pool::{POOL_CAPACITY, Pool, TileMask, random_dominoes, tile_bit};
pub use state::{DOUBLE_BRANCHES, SINGLE_BRANCHES, SearchState};
