//! Message types for the annotation session
//!
//! This module contains:
//! - Msg enum with nested sub-enums for organized message handling
//! - Effect enum describing what the host has to do after a message

use crate::domain::{Coord, Extent, MarkerId, MenuAction, MenuOption, ScreenPoint};

// ============================================================================
// Inbound messages
// ============================================================================

/// Mode toggle controls
#[derive(Debug, Clone, PartialEq)]
pub enum ModeMsg {
    /// Flip edit mode on/off
    ToggleEdit,
    /// Switch to add sub-mode
    EnterAdd,
    /// Switch to delete sub-mode
    EnterDelete,
    /// End the editing session
    Save,
}

/// Events reported by the render surface
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Click on the map background, in working coordinates
    MapClick(Coord),
    /// Click on a marker
    MarkerClick(MarkerId),
    /// Cursor entered a marker at the given screen position
    HoverEnter(MarkerId, ScreenPoint),
    /// Cursor left the hovered marker
    HoverLeave,
}

/// Action menu interactions
#[derive(Debug, Clone, PartialEq)]
pub enum MenuMsg {
    /// Invoke the entry at this index
    Invoke(usize),
    /// Close the menu
    Close,
}

/// File picker and download
#[derive(Debug, Clone, PartialEq)]
pub enum FileMsg {
    /// Raw text of a selected file
    Import(String),
    /// Produce the merged document
    Export,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Mode(ModeMsg),
    Pointer(PointerMsg),
    Menu(MenuMsg),
    File(FileMsg),
}

impl Msg {
    pub fn toggle_edit() -> Self {
        Msg::Mode(ModeMsg::ToggleEdit)
    }

    pub fn enter_add() -> Self {
        Msg::Mode(ModeMsg::EnterAdd)
    }

    pub fn enter_delete() -> Self {
        Msg::Mode(ModeMsg::EnterDelete)
    }

    pub fn save() -> Self {
        Msg::Mode(ModeMsg::Save)
    }

    pub fn map_click(x: f64, y: f64) -> Self {
        Msg::Pointer(PointerMsg::MapClick(Coord::new(x, y)))
    }

    pub fn marker_click(id: MarkerId) -> Self {
        Msg::Pointer(PointerMsg::MarkerClick(id))
    }

    pub fn hover_enter(id: MarkerId, x: f32, y: f32) -> Self {
        Msg::Pointer(PointerMsg::HoverEnter(id, ScreenPoint::new(x, y)))
    }

    pub fn hover_leave() -> Self {
        Msg::Pointer(PointerMsg::HoverLeave)
    }

    pub fn invoke(index: usize) -> Self {
        Msg::Menu(MenuMsg::Invoke(index))
    }

    pub fn close_menu() -> Self {
        Msg::Menu(MenuMsg::Close)
    }

    pub fn import(raw: impl Into<String>) -> Self {
        Msg::File(FileMsg::Import(raw.into()))
    }

    pub fn export() -> Self {
        Msg::File(FileMsg::Export)
    }
}

// ============================================================================
// Outbound effects
// ============================================================================

/// A file offered to the user for download
#[derive(Debug, Clone, PartialEq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// What the host should do after a message was handled
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Animate the view to cover this extent
    FitView { extent: Extent, duration_ms: u64 },
    /// Show the action menu with these entries
    ShowMenu(Vec<MenuOption>),
    /// Hide the action menu
    HideMenu,
    /// Run a menu action for a marker
    RunAction { marker: MarkerId, action: MenuAction },
    /// Offer a file for download
    Download(Download),
    /// Show a user-visible notification
    Notify(String),
}
