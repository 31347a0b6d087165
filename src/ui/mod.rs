pub mod colors;
pub mod messages;
