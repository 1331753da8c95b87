//! Marker lifecycle: creation, info edits, deletion and click routing
//!
//! Every operation checks its mode guard first. A failed guard or an id
//! that no longer exists is a silent no-op: stale callbacks from the render
//! surface can legitimately reference markers that were just deleted.

use crate::domain::{Coord, Marker, MarkerId};

use super::mode::ClickRoute;
use super::prompt::InfoPrompt;
use super::state::Session;

/// Place a new marker at `point` (edit + add mode only)
pub fn create_at(
    session: &mut Session,
    point: Coord,
    prompt: &mut dyn InfoPrompt,
) -> Option<MarkerId> {
    if !session.mode.can_create() {
        log::trace!("Ignoring map click outside add mode");
        return None;
    }
    if !point.x.is_finite() || !point.y.is_finite() {
        log::trace!("Ignoring map click at non-finite ({}, {})", point.x, point.y);
        return None;
    }

    let info = prompt
        .prompt(&session.config.add_prompt, "")
        .unwrap_or_default();
    let id = session.ids.next();
    session.store.push_marker(Marker::new(id, point, info));
    log::debug!("Created marker {id} at ({:.1}, {:.1})", point.x, point.y);
    Some(id)
}

/// Re-prompt for a marker's info (edit mode, not delete)
pub fn edit_info(session: &mut Session, id: MarkerId, prompt: &mut dyn InfoPrompt) -> bool {
    if !session.mode.can_edit_info() {
        log::trace!("Ignoring info edit for {id} outside edit mode");
        return false;
    }
    let Some(current) = session.store.marker(id).map(|m| m.info.clone()) else {
        log::trace!("Info edit for unknown marker {id}");
        return false;
    };

    let info = prompt
        .prompt(&session.config.edit_prompt, &current)
        .unwrap_or_default();
    if let Some(marker) = session.store.marker_mut(id) {
        log::debug!("Marker {id} info changed");
        marker.info = info;
    }
    true
}

/// Remove a marker (edit + delete mode only)
pub fn delete_at(session: &mut Session, id: MarkerId) -> bool {
    if !session.mode.can_delete() {
        log::trace!("Ignoring delete of {id} outside delete mode");
        return false;
    }
    if session.store.remove_marker(id).is_none() {
        log::trace!("Delete of unknown marker {id}");
        return false;
    }

    // Drop presenter references so nothing points at a removed marker
    if session.presenter.hovered().is_some_and(|h| h.marker == id) {
        session.presenter.on_hover_leave();
    }
    if session.presenter.selected() == Some(id) {
        session.presenter.clear_selection();
    }
    log::debug!("Deleted marker {id}");
    true
}

/// Dispatch a click on a marker; returns the branch that fired
pub fn route_click(
    session: &mut Session,
    id: MarkerId,
    prompt: &mut dyn InfoPrompt,
) -> ClickRoute {
    let route = session.mode.click_route();
    match route {
        ClickRoute::EditInfo => {
            edit_info(session, id, prompt);
        }
        ClickRoute::Delete => {
            delete_at(session, id);
        }
        ClickRoute::Select => {
            if session.store.marker(id).is_some() {
                session.presenter.select(id);
            }
        }
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeoMarkConfig;
    use std::collections::HashSet;

    fn answer(text: &'static str) -> impl FnMut(&str, &str) -> Option<String> {
        move |_, _| Some(text.to_string())
    }

    fn never() -> impl FnMut(&str, &str) -> Option<String> {
        |_, _| panic!("prompt must not be invoked")
    }

    fn editing_session() -> Session {
        let mut session = Session::new(GeoMarkConfig::default());
        session.mode.toggle_edit();
        session
    }

    fn with_marker(info: &'static str) -> (Session, MarkerId) {
        let mut session = editing_session();
        session.mode.enter_add();
        let id = create_at(&mut session, Coord::new(1.0, 2.0), &mut answer(info)).unwrap();
        (session, id)
    }

    #[test]
    fn test_create_appends_unique_markers() {
        let mut session = editing_session();
        session.mode.enter_add();
        for n in 1..=20 {
            create_at(&mut session, Coord::new(n as f64, 0.0), &mut answer("x"));
            assert_eq!(session.store.markers().len(), n);
        }
        let ids: HashSet<_> = session.store.markers().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_create_stores_prompt_answer() {
        let (session, id) = with_marker("Bench");
        let marker = session.store.marker(id).unwrap();
        assert_eq!(marker.info, "Bench");
        assert_eq!(marker.position, Coord::new(1.0, 2.0));
        assert!(marker.menu_options.is_empty());
    }

    #[test]
    fn test_cancelled_prompt_stores_empty_info() {
        let mut session = editing_session();
        session.mode.enter_add();
        let mut cancel = |_: &str, _: &str| -> Option<String> { None };
        let id = create_at(&mut session, Coord::default(), &mut cancel).unwrap();
        assert_eq!(session.store.marker(id).unwrap().info, "");
    }

    #[test]
    fn test_create_guard_blocks_prompt() {
        let mut session = Session::new(GeoMarkConfig::default());
        session.mode.enter_add();
        assert!(create_at(&mut session, Coord::default(), &mut never()).is_none());

        session.mode.toggle_edit();
        session.mode.enter_delete();
        assert!(create_at(&mut session, Coord::default(), &mut never()).is_none());
        assert!(session.store.markers().is_empty());
    }

    #[test]
    fn test_create_rejects_non_finite_point() {
        let mut session = editing_session();
        session.mode.enter_add();
        for point in [
            Coord::new(f64::NAN, 1.0),
            Coord::new(1.0, f64::INFINITY),
            Coord::new(f64::NEG_INFINITY, f64::NAN),
        ] {
            assert!(create_at(&mut session, point, &mut never()).is_none());
        }
        assert!(session.store.markers().is_empty());
    }

    #[test]
    fn test_edit_info_prefills_current_value() {
        let (mut session, id) = with_marker("Bench");
        let mut seen_default = String::new();
        let mut prompt = |_: &str, default: &str| {
            seen_default = default.to_string();
            Some("Picnic table".to_string())
        };
        assert!(edit_info(&mut session, id, &mut prompt));
        assert_eq!(seen_default, "Bench");
        assert_eq!(session.store.marker(id).unwrap().info, "Picnic table");
    }

    #[test]
    fn test_guard_violations_leave_markers_unchanged() {
        let (mut session, id) = with_marker("Bench");
        let before = session.store.markers().to_vec();

        session.mode.enter_delete();
        assert!(!edit_info(&mut session, id, &mut never()));
        session.mode.enter_add();
        assert!(!delete_at(&mut session, id));
        session.mode.toggle_edit();
        assert!(!edit_info(&mut session, id, &mut never()));
        assert!(create_at(&mut session, Coord::default(), &mut never()).is_none());

        assert_eq!(session.store.markers(), before.as_slice());
    }

    #[test]
    fn test_lookup_miss_is_noop() {
        let (mut session, _) = with_marker("Bench");
        let before = session.store.markers().to_vec();
        assert!(!edit_info(&mut session, MarkerId(-1), &mut never()));
        session.mode.enter_delete();
        assert!(!delete_at(&mut session, MarkerId(-1)));
        assert_eq!(session.store.markers(), before.as_slice());
    }

    #[test]
    fn test_delete_removes_marker_and_presenter_refs() {
        let (mut session, id) = with_marker("Bench");
        session
            .presenter
            .on_hover_enter(id, Default::default(), (0.0, 0.0));
        session.mode.enter_delete();
        assert!(delete_at(&mut session, id));
        assert!(session.store.marker(id).is_none());
        assert_eq!(session.presenter.hovered(), None);
        assert!(!delete_at(&mut session, id));
    }

    #[test]
    fn test_route_click_fires_exactly_one_branch() {
        // (edit, delete) -> expected route
        for (edit, delete) in [(true, false), (true, true), (false, false), (false, true)] {
            let (mut session, id) = with_marker("Bench");
            if delete {
                session.mode.enter_delete();
            }
            if !edit {
                session.mode.toggle_edit();
            }

            let mut prompted = 0;
            let mut prompt = |_: &str, _: &str| {
                prompted += 1;
                Some("Edited".to_string())
            };
            let route = route_click(&mut session, id, &mut prompt);

            let edited = prompted == 1
                && session.store.marker(id).is_some_and(|m| m.info == "Edited");
            let deleted = session.store.marker(id).is_none();
            let selected = session.presenter.selected() == Some(id);
            let fired = [edited, deleted, selected].iter().filter(|b| **b).count();
            assert_eq!(fired, 1, "edit={edit} delete={delete}");

            let expected = match (edit, delete) {
                (true, false) => ClickRoute::EditInfo,
                (true, true) => ClickRoute::Delete,
                _ => ClickRoute::Select,
            };
            assert_eq!(route, expected);
            assert_eq!(edited, expected == ClickRoute::EditInfo);
            assert_eq!(deleted, expected == ClickRoute::Delete);
        }
    }

    #[test]
    fn test_select_unknown_marker_is_noop() {
        let mut session = Session::new(GeoMarkConfig::default());
        let route = route_click(&mut session, MarkerId(5), &mut never());
        assert_eq!(route, ClickRoute::Select);
        assert_eq!(session.presenter.selected(), None);
    }
}
