//! Form bodies posted by the pages.
//!
//! Station forms post the six inputs named after their JSON keys and are
//! read straight into [`DraftFields`](crate::views::DraftFields).

use serde::Deserialize;

/// Answer posted from the delete confirmation page.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteConfirmation {
    /// `"si"` confirms; anything else, or nothing, declines.
    #[serde(default)]
    pub confirmar: Option<String>,
}

impl DeleteConfirmation {
    pub fn is_confirmed(&self) -> bool {
        self.confirmar.as_deref() == Some("si")
    }
}
