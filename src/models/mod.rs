pub mod application;
pub mod interview;
pub mod stage;
pub mod template;
