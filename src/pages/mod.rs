pub mod board;
pub mod home;
pub mod projects;

pub use board::Board;
pub use home::Home;
pub use projects::Projects;
