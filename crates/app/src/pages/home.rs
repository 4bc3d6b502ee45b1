//! Home page: hosts the gift finder wizard.

use doudou_gift_finder::{GiftFinder, WizardError};

use crate::routes::Route;

#[derive(Debug, Clone, Default)]
pub struct HomePage {
    pub finder: GiftFinder,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finish the wizard and resolve where it sends the shopper.
    pub fn find(&self) -> Result<Route, WizardError> {
        let url = self.finder.find()?;
        Ok(Route::parse(&url).unwrap_or_else(Route::shop))
    }
}
