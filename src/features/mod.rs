pub mod dashboard;
pub mod kanban;
