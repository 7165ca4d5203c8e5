#![doc = include_str!("../README.md")]

mod accumulator;
pub use accumulator::*;

mod composite;
pub use composite::*;

mod collector;
pub use collector::*;
