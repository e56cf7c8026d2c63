/// Where a dragged card was picked up from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub card_id: String,
    pub column_id: String,
}

/// A move ready to hand to the board once a drop lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingMove {
    pub card_id: String,
    pub from_column_id: String,
    pub to_column_id: String,
}

/// Transient drag-and-drop state owned by the board view.
///
/// It only remembers what is in flight; the card's committed location is
/// always read from `BoardState`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    source: Option<DragSource>,
    hovered_column: Option<String>,
}

impl DragState {
    pub fn pick_up(&mut self, card_id: impl Into<String>, column_id: impl Into<String>) {
        self.source = Some(DragSource {
            card_id: card_id.into(),
            column_id: column_id.into(),
        });
        self.hovered_column = None;
    }

    pub fn hover(&mut self, column_id: impl Into<String>) {
        if self.source.is_some() {
            self.hovered_column = Some(column_id.into());
        }
    }

    /// Ends the drag over `target_column_id`. Yields a move only when a card
    /// was picked up and the target differs from where it came from.
    pub fn drop_on(&mut self, target_column_id: &str) -> Option<PendingMove> {
        let source = self.source.take();
        self.hovered_column = None;

        let source = source?;
        if source.column_id == target_column_id {
            return None;
        }
        Some(PendingMove {
            card_id: source.card_id,
            from_column_id: source.column_id,
            to_column_id: target_column_id.to_string(),
        })
    }

    pub fn cancel(&mut self) {
        self.source = None;
        self.hovered_column = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    pub fn is_dragging_card(&self, card_id: &str) -> bool {
        self.source.as_ref().is_some_and(|s| s.card_id == card_id)
    }

    pub fn is_hovering(&self, column_id: &str) -> bool {
        self.hovered_column.as_deref() == Some(column_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_on_other_column_yields_move() {
        let mut drag = DragState::default();
        drag.pick_up("card", "1");
        drag.hover("2");
        assert!(drag.is_dragging_card("card"));
        assert!(drag.is_hovering("2"));

        let pending = drag.drop_on("2").unwrap();
        assert_eq!(
            pending,
            PendingMove {
                card_id: "card".into(),
                from_column_id: "1".into(),
                to_column_id: "2".into(),
            }
        );
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn drop_on_source_column_is_ignored() {
        let mut drag = DragState::default();
        drag.pick_up("card", "1");
        assert_eq!(drag.drop_on("1"), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_without_pick_up_is_ignored() {
        let mut drag = DragState::default();
        drag.hover("2");
        assert!(!drag.is_hovering("2"));
        assert_eq!(drag.drop_on("2"), None);
    }

    #[test]
    fn cancel_discards_everything() {
        let mut drag = DragState::default();
        drag.pick_up("card", "1");
        drag.hover("2");
        drag.cancel();
        assert!(!drag.is_dragging());
        assert!(!drag.is_hovering("2"));
        assert_eq!(drag.drop_on("2"), None);
    }
}
