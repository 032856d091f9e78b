//! Channel position tags and ordered channel maps.

mod position;
pub use position::{ChannelPosition,Placement};

mod map;
pub use map::ChannelMap;
