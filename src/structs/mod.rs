pub mod comment;
pub mod media;
pub mod post;
pub mod user;
