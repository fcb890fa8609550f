pub mod health_controller;
pub mod video_controller;
