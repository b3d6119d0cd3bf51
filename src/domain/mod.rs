pub mod error;
pub mod home;
pub mod job;
pub mod job_post;
pub mod notification;
pub mod profile;
pub mod route;
pub mod validation;
