//! Session message handlers
//!
//! Handles ModeMsg, PointerMsg, MenuMsg and FileMsg against a Session.

use super::markers;
use super::messages::{Effect, FileMsg, MenuMsg, ModeMsg, PointerMsg};
use super::mode::ClickRoute;
use super::prompt::InfoPrompt;
use super::state::Session;

pub fn handle_mode_msg(session: &mut Session, msg: ModeMsg) -> Effect {
    match msg {
        ModeMsg::ToggleEdit => session.mode.toggle_edit(),
        ModeMsg::EnterAdd => session.mode.enter_add(),
        ModeMsg::EnterDelete => session.mode.enter_delete(),
        ModeMsg::Save => {
            if session.save() {
                return Effect::HideMenu;
            }
        }
    }
    Effect::None
}

pub fn handle_pointer_msg(
    session: &mut Session,
    msg: PointerMsg,
    prompt: &mut dyn InfoPrompt,
) -> Effect {
    match msg {
        PointerMsg::MapClick(point) => {
            markers::create_at(session, point, prompt);
        }
        PointerMsg::MarkerClick(id) => {
            if markers::route_click(session, id, prompt) == ClickRoute::Select {
                if let Some(options) = session.menu() {
                    return Effect::ShowMenu(options);
                }
            }
        }
        PointerMsg::HoverEnter(id, screen) => {
            if session.store.marker(id).is_some() {
                let offset = session.config.hover_offset;
                session.presenter.on_hover_enter(id, screen, offset);
            }
        }
        PointerMsg::HoverLeave => session.presenter.on_hover_leave(),
    }
    Effect::None
}

pub fn handle_menu_msg(session: &mut Session, msg: MenuMsg) -> Effect {
    match msg {
        MenuMsg::Invoke(index) => {
            let Some(marker) = session.presenter.selected() else {
                return Effect::None;
            };
            match session.menu().and_then(|options| options.into_iter().nth(index)) {
                Some(option) => Effect::RunAction {
                    marker,
                    action: option.action,
                },
                None => Effect::None,
            }
        }
        MenuMsg::Close => {
            if session.presenter.clear_selection() {
                Effect::HideMenu
            } else {
                Effect::None
            }
        }
    }
}

pub fn handle_file_msg(session: &mut Session, msg: FileMsg) -> Effect {
    match msg {
        FileMsg::Import(raw) => match session.import(&raw) {
            Ok(extent) if extent.is_empty() => Effect::None,
            Ok(extent) => Effect::FitView {
                extent,
                duration_ms: session.config.fit_duration_ms,
            },
            Err(err) => {
                log::warn!("Rejected uploaded file: {err}");
                Effect::Notify(format!("Invalid GeoJSON file: {err}"))
            }
        },
        FileMsg::Export => Effect::Download(session.export()),
    }
}
