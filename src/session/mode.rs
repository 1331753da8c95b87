//! Interaction mode flags and the marker click dispatch table

/// Which marker operation a click on a marker triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickRoute {
    EditInfo,
    Delete,
    Select,
}

/// Edit/add/delete flags.
///
/// Add and delete are mutually exclusive and only take effect while edit
/// mode is on. Toggling edit off keeps the sub-mode, so toggling it back on
/// resumes where the user left off; only `save` clears everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeController {
    edit: bool,
    add: bool,
    delete: bool,
}

impl ModeController {
    pub fn is_edit(&self) -> bool {
        self.edit
    }

    pub fn is_add(&self) -> bool {
        self.add
    }

    pub fn is_delete(&self) -> bool {
        self.delete
    }

    pub fn toggle_edit(&mut self) {
        self.edit = !self.edit;
        log::debug!("Edit mode {}", if self.edit { "on" } else { "off" });
    }

    pub fn enter_add(&mut self) {
        self.add = true;
        self.delete = false;
        log::debug!("Add mode selected");
    }

    pub fn enter_delete(&mut self) {
        self.delete = true;
        self.add = false;
        log::debug!("Delete mode selected");
    }

    /// Leave editing entirely
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn can_create(&self) -> bool {
        self.edit && self.add
    }

    pub fn can_edit_info(&self) -> bool {
        self.edit && !self.delete
    }

    pub fn can_delete(&self) -> bool {
        self.edit && self.delete
    }

    pub fn click_route(&self) -> ClickRoute {
        match (self.edit, self.delete) {
            (true, false) => ClickRoute::EditInfo,
            (true, true) => ClickRoute::Delete,
            (false, _) => ClickRoute::Select,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_modes_are_exclusive() {
        let mut mode = ModeController::default();
        mode.enter_add();
        assert!(mode.is_add() && !mode.is_delete());
        mode.enter_delete();
        assert!(mode.is_delete() && !mode.is_add());
        mode.enter_add();
        assert!(mode.is_add() && !mode.is_delete());
    }

    #[test]
    fn test_toggle_edit_keeps_sub_mode() {
        let mut mode = ModeController::default();
        mode.toggle_edit();
        mode.enter_delete();
        mode.toggle_edit();
        assert!(!mode.is_edit() && mode.is_delete());
        assert!(!mode.can_delete());
        mode.toggle_edit();
        assert!(mode.can_delete());
    }

    #[test]
    fn test_guards_require_edit() {
        let mut mode = ModeController::default();
        mode.enter_add();
        assert!(!mode.can_create());
        assert!(!mode.can_edit_info());
        mode.toggle_edit();
        assert!(mode.can_create());
        assert!(mode.can_edit_info());
        assert!(!mode.can_delete());
    }

    #[test]
    fn test_click_route_table() {
        let cases = [
            (false, false, false, ClickRoute::Select),
            (false, true, false, ClickRoute::Select),
            (false, false, true, ClickRoute::Select),
            (true, false, false, ClickRoute::EditInfo),
            (true, true, false, ClickRoute::EditInfo),
            (true, false, true, ClickRoute::Delete),
        ];
        for (edit, add, delete, expected) in cases {
            let mode = ModeController { edit, add, delete };
            assert_eq!(mode.click_route(), expected, "edit={edit} add={add} delete={delete}");
        }
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut mode = ModeController::default();
        mode.toggle_edit();
        mode.enter_add();
        mode.reset();
        let once = mode;
        mode.reset();
        assert_eq!(mode, once);
        assert_eq!(mode, ModeController::default());
    }
}
