pub mod client;
pub mod market;
pub mod quote;
pub mod workshop;
