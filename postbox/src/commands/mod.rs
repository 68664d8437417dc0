pub mod render;
pub mod replay;
