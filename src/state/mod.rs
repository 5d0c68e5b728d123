// State management module.
// Table selection, the settings form, and the activity log.

pub mod console;
pub mod settings_form;
pub mod table;

pub use console::{ActivityLog, ConsoleLevel, ConsoleMessage};
pub use settings_form::SettingsForm;
pub use table::SelectableTable;
