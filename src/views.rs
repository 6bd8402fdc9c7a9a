//! Presentation-facing state of the calculator and the catalog list.
//!
//! Widgets are not modelled here. A surface holds the text of its input
//! fields, turns it into engine inputs, and exposes what it would render.

mod list_view;
mod main_view;

pub use list_view::ListView;
pub use main_view::{LineInputs, MainRender, MainView, RlgcForm};

/// Confirmation and alert dialogs of a surface.
pub trait Prompt {
    /// Asks a yes/no question; `true` means go ahead.
    fn confirm(&mut self, message: &str) -> bool;
    /// Shows a message that needs no answer.
    fn alert(&mut self, message: &str);
}
