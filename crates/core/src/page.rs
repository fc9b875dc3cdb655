//! Handles to the page elements the widget drives.
//!
//! A front end hands the widget one [`SearchPage`] at construction time instead of
//! the widget looking elements up on its own. The widget only ever calls these
//! methods from its event loop, one at a time.

use crate::types::ResultItem;

/// The search form, its text input, and the results container.
pub trait SearchPage {
    /// Overwrite the text input's value.
    fn set_input_value(&mut self, value: &str);

    /// Remove every element from the results container.
    fn clear_results(&mut self);

    /// Append one clickable result to the results container.
    ///
    /// `author` is already filtered by the widget's `show_author` setting.
    fn append_result(&mut self, index: usize, title: &str, author: Option<&str>);

    /// Show or hide the results container.
    fn set_results_visible(&mut self, visible: bool);

    /// Submit the enclosing form with the input's current value.
    fn submit_form(&mut self);
}

/// Rendering helpers every page gets for free.
pub(crate) trait SearchPageExt: SearchPage {
    /// Clear and hide the dropdown.
    fn hide_results(&mut self) {
        self.clear_results();
        self.set_results_visible(false);
    }

    /// Replace the dropdown contents with `items` and show it.
    fn show_results(&mut self, items: &[ResultItem], show_author: bool) {
        self.clear_results();
        for (i, item) in items.iter().enumerate() {
            self.append_result(i, &item.title, item.display_author(show_author));
        }
        self.set_results_visible(true);
    }
}

impl<P: SearchPage + ?Sized> SearchPageExt for P {}
