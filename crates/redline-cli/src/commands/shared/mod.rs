pub mod input;
pub mod local;
pub mod notice;
