pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod services;
pub mod stats;
