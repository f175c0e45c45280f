pub mod consts;
mod network;

pub use network::*;
