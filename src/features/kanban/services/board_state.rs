use leptos::logging::{log, warn};

use crate::core::error::BoardError;
use crate::core::models::{Card, CardDraft, CardPatch, Column, ColumnDraft};

/// The authoritative in-memory board: an ordered list of columns.
///
/// Every operation checks all ids it needs before touching anything, so an
/// `Err` always leaves the board exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    columns: Vec<Column>,
}

impl BoardState {
    pub fn new(columns: Vec<Column>) -> Self {
        let mut state = Self { columns: Vec::new() };
        state.replace_columns(columns);
        state
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[allow(dead_code)] // Single-column lookup; the views receive whole columns
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    /// Locates a card anywhere on the board, returning its column id too.
    pub fn find_card(&self, card_id: &str) -> Option<(&str, &Card)> {
        self.columns
            .iter()
            .find_map(|col| col.card(card_id).map(|card| (col.id.as_str(), card)))
    }

    pub fn board_total(&self) -> f64 {
        self.columns.iter().map(Column::total_amount).sum()
    }

    /// Overwrites the whole column list. Totals are recomputed on the way in.
    pub fn replace_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        for column in &mut self.columns {
            column.recompute_total();
        }
        log!("board reset with {} columns", self.columns.len());
    }

    pub fn add_column(&mut self, draft: ColumnDraft) -> String {
        let column = Column::from_draft(draft);
        let id = column.id.clone();
        log!("column {} added: {}", id, column.title);
        self.columns.push(column);
        id
    }

    pub fn rename_column(&mut self, column_id: &str, draft: ColumnDraft) -> Result<(), BoardError> {
        let index = self.column_index(column_id)?;
        self.columns[index].rename(draft);
        Ok(())
    }

    /// Removes a column along with the cards it holds.
    pub fn remove_column(&mut self, column_id: &str) -> Result<Column, BoardError> {
        let index = self.column_index(column_id)?;
        let column = self.columns.remove(index);
        log!("column {} removed with {} cards", column.id, column.cards().len());
        Ok(column)
    }

    pub fn add_card(&mut self, column_id: &str, draft: CardDraft) -> Result<String, BoardError> {
        let index = self.column_index(column_id)?;
        let card = Card::from_draft(draft);
        let id = card.id.clone();
        self.columns[index].push(card);
        log!("card {} added to column {}", id, column_id);
        Ok(id)
    }

    pub fn edit_card(&mut self, column_id: &str, card_id: &str, patch: CardPatch) -> Result<(), BoardError> {
        let index = self.column_index(column_id)?;
        if !self.columns[index].patch(card_id, &patch) {
            return Err(self.card_not_found(column_id, card_id));
        }
        Ok(())
    }

    pub fn delete_card(&mut self, column_id: &str, card_id: &str) -> Result<Card, BoardError> {
        let index = self.column_index(column_id)?;
        match self.columns[index].take(card_id) {
            Some(card) => {
                log!("card {} deleted from column {}", card_id, column_id);
                Ok(card)
            }
            None => Err(self.card_not_found(column_id, card_id)),
        }
    }

    /// Moves a card to the end of another column, keeping its id and fields.
    ///
    /// Moving within the same column leaves the board unchanged.
    pub fn move_card(&mut self, from_column_id: &str, to_column_id: &str, card_id: &str) -> Result<(), BoardError> {
        let from = self.column_index(from_column_id)?;
        let to = self.column_index(to_column_id)?;
        if !self.columns[from].contains(card_id) {
            return Err(self.card_not_found(from_column_id, card_id));
        }
        if from == to {
            return Ok(());
        }

        let card = self.columns[from]
            .take(card_id)
            .ok_or_else(|| self.card_not_found(from_column_id, card_id))?;
        self.columns[to].push(card);
        log!("card {} moved from {} to {}", card_id, from_column_id, to_column_id);
        Ok(())
    }

    fn column_index(&self, column_id: &str) -> Result<usize, BoardError> {
        self.columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| {
                warn!("column {} not found", column_id);
                BoardError::ColumnNotFound(column_id.to_string())
            })
    }

    fn card_not_found(&self, column_id: &str, card_id: &str) -> BoardError {
        warn!("card {} not found in column {}", card_id, column_id);
        BoardError::CardNotFound {
            column_id: column_id.to_string(),
            card_id: card_id.to_string(),
        }
    }
}
