pub mod catalog;
pub mod matching;
pub mod server;
