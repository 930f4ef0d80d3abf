pub mod frame_status;
pub mod settings;
