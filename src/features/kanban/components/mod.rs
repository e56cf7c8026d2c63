pub mod add_column_form;
pub mod card;
pub mod card_form;
pub mod column;

pub use add_column_form::AddColumnForm;
pub use card::KanbanCard;
pub use card_form::CardForm;
pub use column::KanbanColumn;
