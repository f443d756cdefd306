pub mod api;
pub mod contribution;
pub mod project;
pub mod recruit;
pub mod user;
pub mod user_picture;
