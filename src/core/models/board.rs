use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::ValidationError;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn check_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

fn check_amount(amount: f64) -> Result<f64, ValidationError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount(amount));
    }
    Ok(amount)
}

/// A titled monetary line item. Amounts are in BRL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub amount: f64,
}

impl Card {
    pub fn from_draft(draft: CardDraft) -> Self {
        Self {
            id: new_id(),
            title: draft.title,
            amount: draft.amount,
        }
    }

    fn apply(&mut self, patch: &CardPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
    }
}

/// Validated input for a new card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDraft {
    title: String,
    amount: f64,
}

impl CardDraft {
    pub fn new(title: impl AsRef<str>, amount: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            title: check_title(title.as_ref())?,
            amount: check_amount(amount)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Partial card update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardPatch {
    title: Option<String>,
    amount: Option<f64>,
}

impl CardPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl AsRef<str>) -> Result<Self, ValidationError> {
        self.title = Some(check_title(title.as_ref())?);
        Ok(self)
    }

    pub fn amount(mut self, amount: f64) -> Result<Self, ValidationError> {
        self.amount = Some(check_amount(amount)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.amount.is_none()
    }
}

impl CardPatch {
    /// Only the fields of `draft` that differ from `card`. An unchanged form
    /// gives an empty patch.
    pub fn diff(card: &Card, draft: &CardDraft) -> Result<Self, ValidationError> {
        let mut patch = Self::new();
        if draft.title() != card.title {
            patch = patch.title(draft.title())?;
        }
        if draft.amount() != card.amount {
            patch = patch.amount(draft.amount())?;
        }
        Ok(patch)
    }
}

/// Validated input for a new or renamed column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDraft {
    title: String,
    color: String,
}

impl ColumnDraft {
    pub fn new(title: impl AsRef<str>, color: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: check_title(title.as_ref())?,
            color: color.into(),
        })
    }
}

/// An ordered bucket of cards with a running total.
///
/// `total_amount` is a cached aggregate of `cards`. It has no setter and is
/// recomputed by every method that touches the card list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub title: String,
    pub color: String,
    total_amount: f64,
    cards: Vec<Card>,
}

impl Column {
    /// Seeds a column with a caller-chosen id.
    pub fn with_id(id: impl Into<String>, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: color.into(),
            total_amount: 0.0,
            cards: Vec::new(),
        }
    }

    pub fn from_draft(draft: ColumnDraft) -> Self {
        Self::with_id(new_id(), draft.title, draft.color)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.cards.iter().any(|c| c.id == card_id)
    }

    pub(crate) fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub(crate) fn rename(&mut self, draft: ColumnDraft) {
        self.title = draft.title;
        self.color = draft.color;
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
        self.recompute_total();
    }

    pub(crate) fn take(&mut self, card_id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == card_id)?;
        let card = self.cards.remove(index);
        self.recompute_total();
        Some(card)
    }

    pub(crate) fn patch(&mut self, card_id: &str, patch: &CardPatch) -> bool {
        let Some(card) = self.cards.iter_mut().find(|c| c.id == card_id) else {
            return false;
        };
        card.apply(patch);
        self.recompute_total();
        true
    }

    pub(crate) fn recompute_total(&mut self) {
        self.total_amount = self.cards.iter().map(|c| c.amount).sum();
    }
}
