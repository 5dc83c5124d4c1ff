pub mod interview_dto;
pub mod stage_dto;
