pub mod songs;
pub mod system;
