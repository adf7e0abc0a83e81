pub mod display;
pub mod export;
pub mod figure;
pub mod ticks;
