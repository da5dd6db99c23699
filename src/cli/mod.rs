pub mod doctor;
pub mod list;
pub mod show;
