pub mod video_dto;
