pub mod config;
pub mod meetings;
pub mod participants;
pub mod registrants;
pub mod settings;
pub mod users;
pub mod validate;
