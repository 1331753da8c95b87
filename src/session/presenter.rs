//! Hover info display and selection (action menu) state

use crate::domain::{Marker, MarkerId, MenuAction, MenuOption, ScreenPoint};

/// Marker under the cursor and where to draw its info box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub marker: MarkerId,
    pub display_position: ScreenPoint,
}

/// Hover and selection are independent: both may point at different markers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Presenter {
    hovered: Option<Hover>,
    selected: Option<MarkerId>,
}

impl Presenter {
    pub fn hovered(&self) -> Option<Hover> {
        self.hovered
    }

    pub fn selected(&self) -> Option<MarkerId> {
        self.selected
    }

    pub fn on_hover_enter(&mut self, marker: MarkerId, screen: ScreenPoint, offset: (f32, f32)) {
        self.hovered = Some(Hover {
            marker,
            display_position: screen.offset(offset),
        });
    }

    pub fn on_hover_leave(&mut self) {
        self.hovered = None;
    }

    pub fn select(&mut self, marker: MarkerId) {
        log::debug!("Selected marker {marker}");
        self.selected = Some(marker);
    }

    /// Clear the selection; returns whether anything was selected
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }
}

/// Entries of the action menu for `marker`: the fixed options followed by
/// whatever the marker carries itself.
pub fn menu_options_for(marker: &Marker, external_link: &str) -> Vec<MenuOption> {
    let mut options = vec![
        MenuOption::new("New Feature", MenuAction::NewFeature),
        MenuOption::new("Info", MenuAction::Info),
        MenuOption::new("New Settings", MenuAction::NewSettings),
        MenuOption::new(
            "External Link",
            MenuAction::OpenLink(external_link.to_string()),
        ),
    ];
    options.extend(marker.menu_options.iter().cloned());
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;

    #[test]
    fn test_hover_applies_offset() {
        let mut presenter = Presenter::default();
        presenter.on_hover_enter(MarkerId(1), ScreenPoint::new(200.0, 150.0), (-60.0, -60.0));
        let hover = presenter.hovered().unwrap();
        assert_eq!(hover.marker, MarkerId(1));
        assert_eq!(hover.display_position, ScreenPoint::new(140.0, 90.0));

        presenter.on_hover_leave();
        presenter.on_hover_leave();
        assert_eq!(presenter.hovered(), None);
    }

    #[test]
    fn test_hover_and_selection_are_independent() {
        let mut presenter = Presenter::default();
        presenter.select(MarkerId(1));
        presenter.on_hover_enter(MarkerId(2), ScreenPoint::default(), (0.0, 0.0));
        assert_eq!(presenter.selected(), Some(MarkerId(1)));
        assert_eq!(presenter.hovered().map(|h| h.marker), Some(MarkerId(2)));

        presenter.on_hover_leave();
        assert_eq!(presenter.selected(), Some(MarkerId(1)));
    }

    #[test]
    fn test_clear_selection_is_idempotent() {
        let mut presenter = Presenter::default();
        assert!(!presenter.clear_selection());
        presenter.select(MarkerId(3));
        assert!(presenter.clear_selection());
        assert!(!presenter.clear_selection());
        assert_eq!(presenter.selected(), None);
    }

    #[test]
    fn test_menu_options() {
        let mut marker = Marker::new(MarkerId(1), Coord::default(), String::new());
        let labels: Vec<_> = menu_options_for(&marker, "https://example.com")
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, ["New Feature", "Info", "New Settings", "External Link"]);

        marker
            .menu_options
            .push(MenuOption::new("Directions", MenuAction::Info));
        let options = menu_options_for(&marker, "https://example.com");
        assert_eq!(options.len(), 5);
        assert_eq!(options[4].label, "Directions");
        assert_eq!(
            options[3].action,
            MenuAction::OpenLink("https://example.com".to_string())
        );
    }
}
