pub mod lookup;
pub mod names;
pub mod render;
