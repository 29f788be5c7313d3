pub mod cell;
pub mod fence;
mod sync;
