pub mod interactive;
pub mod snapshot;
