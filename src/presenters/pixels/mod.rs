pub mod backend;
mod rgba;
