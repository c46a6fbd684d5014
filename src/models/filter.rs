//! Event list filtering
//!
//! Pure derivations over the loaded student event list. Filtering never
//! re-sorts: the displayed subset keeps the order the server returned.

use chrono::NaiveDate;

use super::event::AvailableEvent;

/// Seat/date availability buckets offered by the student view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvailabilityFilter {
    #[default]
    All,
    /// Events scheduled on the current calendar day
    Today,
    /// Events with 5 or fewer seats left
    Urgent,
    /// Events with more than 10 seats left
    Many,
}

/// The tuple of criteria driving the student event list display
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: String,
    /// `None` is the "all categories" sentinel
    pub category: Option<String>,
    pub availability: AvailabilityFilter,
}

impl FilterCriteria {
    /// Accepts the select-widget value, where the literal `"all"` clears
    /// the category selection
    pub fn set_category(&mut self, selection: &str) {
        if selection == "all" {
            self.category = None;
        } else {
            self.category = Some(selection.to_string());
        }
    }

    /// Reset every criterion to its no-op value
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    fn matches_search(&self, event: &AvailableEvent) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        event.title.to_lowercase().contains(&needle)
            || event
                .speaker
                .as_deref()
                .map_or(false, |s| s.to_lowercase().contains(&needle))
            || event
                .description
                .as_deref()
                .map_or(false, |d| d.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, event: &AvailableEvent) -> bool {
        match &self.category {
            None => true,
            Some(selected) => event.category.as_deref() == Some(selected.as_str()),
        }
    }

    fn matches_availability(&self, event: &AvailableEvent, today: NaiveDate) -> bool {
        match self.availability {
            AvailabilityFilter::All => true,
            AvailabilityFilter::Urgent => event.remaining_seats <= 5,
            AvailabilityFilter::Many => event.remaining_seats > 10,
            AvailabilityFilter::Today => event
                .date_time
                .map_or(false, |dt| dt.date() == today),
        }
    }
}

/// Derive the displayed subset of `events` under `criteria`.
///
/// `today` is the reference calendar day for the `Today` bucket; callers pass
/// the local date so the derivation itself stays pure. All three criteria
/// combine with logical AND and the relative order of `events` is preserved.
pub fn filter_events<'a>(
    events: &'a [AvailableEvent],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<&'a AvailableEvent> {
    events
        .iter()
        .filter(|event| {
            criteria.matches_search(event)
                && criteria.matches_category(event)
                && criteria.matches_availability(event, today)
        })
        .collect()
}

/// Distinct categories across the loaded set, in first-seen order, for the
/// category selector
pub fn distinct_categories(events: &[AvailableEvent]) -> Vec<String> {
    let mut categories = Vec::new();
    for event in events {
        if let Some(category) = &event.category {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.clone());
            }
        }
    }
    categories
}
