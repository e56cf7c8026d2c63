pub mod board;
pub mod project;

pub use board::{Card, CardDraft, CardPatch, Column, ColumnDraft};
pub use project::{Client, Project, ProjectStatus};
