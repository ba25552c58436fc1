use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Quote validation errors. Messages are user-facing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error("Please add at least one item with a name and a valid price")]
    NoValidItems,
}

/// A single priced line in a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub item: String,
    pub price: f64,
}

/// A mechanic's itemized price proposal against a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub items: Vec<QuoteItem>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub accepted: bool,
}

impl Quote {
    /// Total is always the exact sum of the line-item prices.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// One row of the quotation form, as the user typed it.
#[derive(Debug, Clone, Default)]
pub struct DraftRow {
    pub name: String,
    pub price: String,
}

impl DraftRow {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// A row is valid when it has a non-empty name and a parseable,
    /// non-negative, finite price.
    fn parse(&self) -> Option<QuoteItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        let price: f64 = self.price.trim().parse().ok()?;
        if !price.is_finite() || price < 0.0 {
            return None;
        }
        Some(QuoteItem {
            item: name.to_string(),
            price,
        })
    }
}

/// Raw quotation-form input. Rows that fail to parse are dropped; a draft
/// with no surviving rows is not submittable.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    pub rows: Vec<DraftRow>,
    pub note: String,
}

impl QuoteDraft {
    pub fn new(rows: Vec<DraftRow>, note: impl Into<String>) -> Self {
        Self {
            rows,
            note: note.into(),
        }
    }

    pub fn validate(&self) -> Result<Quote, QuoteError> {
        let items: Vec<QuoteItem> = self.rows.iter().filter_map(DraftRow::parse).collect();
        if items.is_empty() {
            return Err(QuoteError::NoValidItems);
        }
        let note = self.note.trim();
        Ok(Quote {
            items,
            note: (!note.is_empty()).then(|| note.to_string()),
            accepted: false,
        })
    }
}
