pub mod engine;
pub mod margin;
