pub mod sample;
pub mod write;
