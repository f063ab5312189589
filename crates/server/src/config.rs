//! Engine configuration.

use catalog::MAX_SUGGESTIONS;

/// How matched suggestions are ordered before truncation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestionOrder {
    /// Catalog evaluation order
    #[default]
    Catalog,
    /// Descending catalog weight, ties in catalog order
    Weighted,
}

/// Tunables for a `RecommendationEngine`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_suggestions: usize,
    order: SuggestionOrder,
}

impl EngineConfig {
    /// `max_suggestions` is clamped into `1..=MAX_SUGGESTIONS`
    pub fn new(max_suggestions: usize, order: SuggestionOrder) -> Self {
        Self {
            max_suggestions: max_suggestions.clamp(1, MAX_SUGGESTIONS),
            order,
        }
    }

    pub fn with_max_suggestions(self, max_suggestions: usize) -> Self {
        Self::new(max_suggestions, self.order)
    }

    pub fn with_order(self, order: SuggestionOrder) -> Self {
        Self::new(self.max_suggestions, order)
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    pub fn order(&self) -> SuggestionOrder {
        self.order
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(MAX_SUGGESTIONS, SuggestionOrder::Catalog)
    }
}
