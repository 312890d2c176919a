mod search;
mod state;

pub use search::astar;
