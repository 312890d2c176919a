//! Shortest-path search over the navigable graph

pub mod astar;
mod path_finder;
mod route;

pub use astar::astar;
pub use path_finder::PathFinder;
pub use route::Route;
