use leptos::logging::warn;
use leptos::prelude::*;
use crate::core::config::BoardConfig;
use crate::core::error::BoardError;
use crate::core::models::{CardDraft, CardPatch, ColumnDraft};
use crate::features::kanban::services::{BoardState, DragState};

/// Reactive handle over one board view's state.
///
/// The board lives only as long as the view that called [`use_board`].
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: ReadSignal<BoardState>,
    pub drag: ReadSignal<DragState>,
    pub last_error: ReadSignal<Option<BoardError>>,
    pub add_column: Callback<ColumnDraft>,
    pub rename_column: Callback<(String, ColumnDraft)>,
    pub remove_column: Callback<String>,
    pub add_card: Callback<(String, CardDraft)>,
    pub edit_card: Callback<(String, String, CardPatch)>,
    pub delete_card: Callback<(String, String)>,
    pub reset: Callback<()>,
    pub pick_up: Callback<String>,
    pub hover: Callback<String>,
    pub drop_on: Callback<String>,
    pub cancel_drag: Callback<()>,
}

// Run one board operation, recording or clearing the last error
fn apply<T>(
    board: RwSignal<BoardState>,
    last_error: RwSignal<Option<BoardError>>,
    op: impl FnOnce(&mut BoardState) -> Result<T, BoardError>,
) -> Option<T> {
    let mut outcome = None;
    board.update(|state| outcome = Some(op(state)));

    match outcome? {
        Ok(value) => {
            last_error.set(None);
            Some(value)
        }
        Err(e) => {
            warn!("Board operation rejected: {}", e);
            last_error.set(Some(e));
            None
        }
    }
}

pub fn use_board(config: &BoardConfig) -> BoardHook {
    let seed = config.seed_columns();
    let board = RwSignal::new(BoardState::new(seed.clone()));
    let drag = RwSignal::new(DragState::default());
    let last_error = RwSignal::new(None::<BoardError>);

    let add_column = Callback::new(move |draft: ColumnDraft| {
        apply(board, last_error, |state| Ok(state.add_column(draft)));
    });

    let rename_column = Callback::new(move |(column_id, draft): (String, ColumnDraft)| {
        apply(board, last_error, |state| state.rename_column(&column_id, draft));
    });

    let remove_column = Callback::new(move |column_id: String| {
        apply(board, last_error, |state| state.remove_column(&column_id));
    });

    let add_card = Callback::new(move |(column_id, draft): (String, CardDraft)| {
        apply(board, last_error, |state| state.add_card(&column_id, draft));
    });

    let edit_card = Callback::new(move |(column_id, card_id, patch): (String, String, CardPatch)| {
        apply(board, last_error, |state| state.edit_card(&column_id, &card_id, patch));
    });

    let delete_card = Callback::new(move |(column_id, card_id): (String, String)| {
        apply(board, last_error, |state| state.delete_card(&column_id, &card_id));
    });

    let reset = Callback::new(move |_: ()| {
        let columns = seed.clone();
        board.update(|state| state.replace_columns(columns));
        drag.update(DragState::cancel);
        last_error.set(None);
    });

    // The source column comes from the board, not from the dragged element
    let pick_up = Callback::new(move |card_id: String| {
        let column_id = board.with_untracked(|state| state.find_card(&card_id).map(|(col, _)| col.to_string()));
        match column_id {
            Some(column_id) => drag.update(|d| d.pick_up(card_id, column_id)),
            None => warn!("card {} is not on the board; drag ignored", card_id),
        }
    });

    let hover = Callback::new(move |column_id: String| {
        // Skip the write when nothing changes; dragover fires continuously
        if drag.with_untracked(|d| d.is_dragging() && !d.is_hovering(&column_id)) {
            drag.update(|d| d.hover(column_id));
        }
    });

    let drop_on = Callback::new(move |target_column_id: String| {
        let mut pending = None;
        drag.update(|d| pending = d.drop_on(&target_column_id));
        if let Some(m) = pending {
            apply(board, last_error, |state| {
                state.move_card(&m.from_column_id, &m.to_column_id, &m.card_id)
            });
        }
    });

    let cancel_drag = Callback::new(move |_: ()| {
        if drag.with_untracked(DragState::is_dragging) {
            drag.update(DragState::cancel);
        }
    });

    BoardHook {
        board: board.read_only(),
        drag: drag.read_only(),
        last_error: last_error.read_only(),
        add_column,
        rename_column,
        remove_column,
        add_card,
        edit_card,
        delete_card,
        reset,
        pick_up,
        hover,
        drop_on,
        cancel_drag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Column;

    fn card_ids(hook: &BoardHook, column_id: &str) -> Vec<String> {
        hook.board.with_untracked(|b| {
            b.columns()
                .iter()
                .find(|c| c.id == column_id)
                .map(|c| c.cards().iter().map(|card| card.id.clone()).collect())
                .unwrap_or_default()
        })
    }

    fn total_of(hook: &BoardHook, column_id: &str) -> f64 {
        hook.board
            .with_untracked(|b| b.column(column_id).map(Column::total_amount))
            .unwrap_or_default()
    }

    fn setup() -> (Owner, BoardHook, String) {
        let owner = Owner::new();
        owner.set();
        let hook = use_board(&BoardConfig::default());
        hook.add_card.run(("1".to_string(), CardDraft::new("Logo", 1000.0).unwrap()));
        let id = card_ids(&hook, "1").remove(0);
        (owner, hook, id)
    }

    #[test]
    fn drop_moves_card_and_both_totals() {
        let (_owner, hook, id) = setup();

        hook.pick_up.run(id.clone());
        hook.hover.run("2".to_string());
        assert!(hook.drag.with_untracked(|d| d.is_hovering("2")));
        hook.drop_on.run("2".to_string());

        assert!(card_ids(&hook, "1").is_empty());
        assert_eq!(card_ids(&hook, "2"), vec![id]);
        assert_eq!(total_of(&hook, "1"), 0.0);
        assert_eq!(total_of(&hook, "2"), 1000.0);
        assert!(!hook.drag.with_untracked(DragState::is_dragging));
        assert_eq!(hook.last_error.get_untracked(), None);
    }

    #[test]
    fn stale_drop_records_error_and_keeps_board() {
        let (_owner, hook, id) = setup();

        hook.pick_up.run(id.clone());
        // Deleted while still in flight
        hook.delete_card.run(("1".to_string(), id.clone()));
        let before = hook.board.get_untracked();

        hook.drop_on.run("2".to_string());

        assert_eq!(hook.board.get_untracked(), before);
        assert_eq!(
            hook.last_error.get_untracked(),
            Some(BoardError::CardNotFound {
                column_id: "1".to_string(),
                card_id: id,
            })
        );
    }

    #[test]
    fn unknown_card_never_starts_a_drag() {
        let (_owner, hook, _) = setup();
        let before = hook.board.get_untracked();

        hook.pick_up.run("ghost".to_string());
        hook.drop_on.run("2".to_string());

        assert!(!hook.drag.with_untracked(DragState::is_dragging));
        assert_eq!(hook.board.get_untracked(), before);
        assert_eq!(hook.last_error.get_untracked(), None);
    }

    #[test]
    fn successful_operation_clears_last_error() {
        let (_owner, hook, _) = setup();

        hook.remove_column.run("missing".to_string());
        assert_eq!(
            hook.last_error.get_untracked(),
            Some(BoardError::ColumnNotFound("missing".to_string()))
        );

        hook.add_column.run(ColumnDraft::new("Follow-up", "bg-teal-500").unwrap());
        assert_eq!(hook.last_error.get_untracked(), None);
        assert_eq!(hook.board.with_untracked(|b| b.columns().len()), 3);
    }

    #[test]
    fn reset_restores_the_seed() {
        let (_owner, hook, id) = setup();
        hook.add_column.run(ColumnDraft::new("Follow-up", "bg-teal-500").unwrap());
        hook.pick_up.run(id);
        hook.remove_column.run("missing".to_string());

        hook.reset.run(());

        let seed = BoardState::new(BoardConfig::default().seed_columns());
        assert_eq!(hook.board.get_untracked(), seed);
        assert_eq!(hook.board.with_untracked(BoardState::board_total), 0.0);
        assert!(!hook.drag.with_untracked(DragState::is_dragging));
        assert_eq!(hook.last_error.get_untracked(), None);
    }
}
