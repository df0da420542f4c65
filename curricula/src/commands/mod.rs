// curricula/src/commands/mod.rs

pub mod assemble;
pub mod diff;
pub mod normalize;
pub mod sort;
pub mod split;
pub mod triage;
pub mod verify;
