//! Mocked map view state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapView {
    pub selected_store: Option<String>,
    pub hovered_store: Option<String>,
}

impl MapView {
    /// Clicking a pin selects it; clicking the selected pin again clears it.
    pub fn toggle_select(&mut self, store_id: &str) {
        if self.selected_store.as_deref() == Some(store_id) {
            self.selected_store = None;
        } else {
            self.selected_store = Some(store_id.to_string());
        }
    }

    pub fn hover(&mut self, store_id: Option<&str>) {
        self.hovered_store = store_id.map(str::to_string);
    }
}
