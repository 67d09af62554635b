use crate::domain::model::{CardView, ServiceRecord};
use crate::domain::ports::DisplaySurface;

/// Rebuilds the visible card list from any record sequence, full catalog or
/// filtered. The surface is cleared first, so repeated calls with the same
/// input produce the same display (no accumulation). The no-results
/// indicator is recomputed from the input on every call.
pub fn render<S: DisplaySurface>(records: &[ServiceRecord], surface: &mut S) {
    surface.clear();
    surface.set_no_results(records.is_empty());

    for record in records {
        surface.push_card(&CardView::from_record(record));
    }
}
