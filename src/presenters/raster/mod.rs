//! Software drawing backend used by the headless snapshot and underneath
//! the window backend.

pub mod canvas;
