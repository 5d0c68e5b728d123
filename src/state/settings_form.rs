// Settings form state.
// Row cursor, in-progress edit buffer, and the in-memory settings record.

use crate::error::Result;
use crate::fleet::{SettingField, SettingKey, Settings};

/// State for the System Settings panel.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    /// Current values. Only mutated through `update_field`.
    pub settings: Settings,
    /// Index into `SettingKey::ALL`.
    pub selected: usize,
    /// Text being typed for the selected row, when editing.
    pub editing: Option<String>,
}

impl SettingsForm {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            selected: 0,
            editing: None,
        }
    }

    pub fn selected_key(&self) -> SettingKey {
        SettingKey::ALL[self.selected.min(SettingKey::ALL.len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn select_next(&mut self) {
        if self.editing.is_none() && self.selected + 1 < SettingKey::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.editing.is_none() {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    /// Overwrite one field. The other six are left as they were.
    pub fn update_field(&mut self, field: SettingField) {
        tracing::debug!(field = field.key().name(), ?field, "settings field updated");
        self.settings.update_field(field);
    }

    /// Open the edit buffer on the selected row, seeded with its current value.
    pub fn begin_edit(&mut self) {
        let key = self.selected_key();
        self.editing = Some(self.settings.display(key));
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(buffer) = &mut self.editing {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(buffer) = &mut self.editing {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Parse the edit buffer and apply it. On a parse error the buffer is
    /// dropped and the field keeps its previous value.
    pub fn commit_edit(&mut self) -> Result<Option<SettingField>> {
        let Some(buffer) = self.editing.take() else {
            return Ok(None);
        };
        let field = self.selected_key().parse(&buffer)?;
        self.update_field(field);
        Ok(Some(field))
    }

    /// Step the notification method when its row is selected.
    pub fn cycle_choice(&mut self, forward: bool) -> Option<SettingField> {
        if self.selected_key() != SettingKey::NotificationMethod || self.is_editing() {
            return None;
        }
        let current = self.settings.notification_method;
        let method = if forward { current.next() } else { current.prev() };
        let field = SettingField::NotificationMethod(method);
        self.update_field(field);
        Some(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashError;
    use crate::fleet::NotificationMethod;

    #[test]
    fn test_initial_state_matches_defaults() {
        let form = SettingsForm::new(Settings::default());
        assert_eq!(form.settings, Settings::default());
        assert_eq!(form.selected_key(), SettingKey::CrowdingThreshold);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_edit_and_commit() {
        let mut form = SettingsForm::new(Settings::default());
        form.select_next(); // reassignment radius

        form.begin_edit();
        assert_eq!(form.editing.as_deref(), Some("5"));
        form.pop_char();
        form.push_char('1');
        form.push_char('2');

        let field = form.commit_edit().unwrap();
        assert_eq!(field, Some(SettingField::ReassignmentRadius(12)));
        assert_eq!(form.settings.reassignment_radius, 12);
        assert!(!form.is_editing());

        let mut expected = Settings::default();
        expected.reassignment_radius = 12;
        assert_eq!(form.settings, expected);
    }

    #[test]
    fn test_rejected_edit_keeps_value() {
        let mut form = SettingsForm::new(Settings::default());
        form.begin_edit();
        form.pop_char();
        form.pop_char();
        form.push_char('x');

        let err = form.commit_edit().unwrap_err();
        assert!(matches!(err, DashError::InvalidSettingValue { .. }));
        assert_eq!(form.settings, Settings::default());
        assert!(!form.is_editing());
    }

    #[test]
    fn test_cancel_edit() {
        let mut form = SettingsForm::new(Settings::default());
        form.begin_edit();
        form.push_char('9');
        form.cancel_edit();
        assert_eq!(form.settings, Settings::default());
        assert_eq!(form.commit_edit().unwrap(), None);
    }

    #[test]
    fn test_cursor_locked_while_editing() {
        let mut form = SettingsForm::new(Settings::default());
        form.begin_edit();
        form.select_next();
        assert_eq!(form.selected, 0);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut form = SettingsForm::new(Settings::default());
        for _ in 0..20 {
            form.select_next();
        }
        assert_eq!(form.selected_key(), SettingKey::NotificationMethod);
        for _ in 0..20 {
            form.select_prev();
        }
        assert_eq!(form.selected, 0);
    }

    #[test]
    fn test_cycle_choice_only_on_notification_row() {
        let mut form = SettingsForm::new(Settings::default());
        assert!(form.cycle_choice(true).is_none());

        form.selected = SettingKey::ALL.len() - 1;
        assert_eq!(
            form.cycle_choice(true),
            Some(SettingField::NotificationMethod(NotificationMethod::Sms))
        );
        form.cycle_choice(false);
        form.cycle_choice(false);
        assert_eq!(form.settings.notification_method, NotificationMethod::Email);
    }
}
