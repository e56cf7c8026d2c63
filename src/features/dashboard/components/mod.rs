pub mod active_projects_table;
pub mod summary_cards;

pub use active_projects_table::ActiveProjectsTable;
pub use summary_cards::{TotalClientsCard, TotalProjectsCard, TotalValueCard};
