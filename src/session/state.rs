//! Session state and the `update` entry point

use crate::codec::{self, Import, ParseError};
use crate::config::GeoMarkConfig;
use crate::domain::{Extent, Feature, Marker, MarkerIdAllocator, MenuOption, ScreenPoint};

use super::handlers;
use super::messages::{Download, Effect, Msg};
use super::mode::ModeController;
use super::presenter::{Presenter, menu_options_for};
use super::prompt::InfoPrompt;
use super::store::FeatureStore;

/// The annotation session: store, mode flags and presentation state.
///
/// All mutation goes through `update`, which the host calls once per UI
/// event on a single thread.
#[derive(Clone, Debug)]
pub struct Session {
    pub config: GeoMarkConfig,
    pub store: FeatureStore,
    pub mode: ModeController,
    pub presenter: Presenter,
    pub ids: MarkerIdAllocator,
}

/// Info box contents for the hovered marker
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo<'a> {
    pub position: ScreenPoint,
    pub text: &'a str,
}

/// Everything the render surface needs to draw the current state
#[derive(Clone, Debug)]
pub struct View<'a> {
    pub base: &'a [Feature],
    pub markers: &'a [Marker],
    pub mode: ModeController,
    pub hover: Option<HoverInfo<'a>>,
    pub menu: Option<Vec<MenuOption>>,
}

impl Session {
    pub fn new(config: GeoMarkConfig) -> Self {
        Self {
            config,
            store: FeatureStore::default(),
            mode: ModeController::default(),
            presenter: Presenter::default(),
            ids: MarkerIdAllocator::default(),
        }
    }

    /// Handle one message and report what the host has to do
    pub fn update(&mut self, msg: Msg, prompt: &mut dyn InfoPrompt) -> Effect {
        match msg {
            Msg::Mode(msg) => handlers::handle_mode_msg(self, msg),
            Msg::Pointer(msg) => handlers::handle_pointer_msg(self, msg, prompt),
            Msg::Menu(msg) => handlers::handle_menu_msg(self, msg),
            Msg::File(msg) => handlers::handle_file_msg(self, msg),
        }
    }

    /// End the editing session: all mode flags off, selection cleared.
    ///
    /// Returns whether a selection was cleared.
    pub fn save(&mut self) -> bool {
        self.mode.reset();
        self.presenter.clear_selection()
    }

    /// Replace the base features with the contents of `raw`.
    ///
    /// On error the current base features are left untouched.
    pub fn import(&mut self, raw: &str) -> Result<Extent, ParseError> {
        let Import {
            features,
            extent,
            projection,
        } = codec::import_str(raw)?;
        log::info!("Imported {} features from {projection:?}", features.len());
        self.store.replace_base(features);
        Ok(extent)
    }

    /// Merged document of base features followed by markers
    pub fn export(&self) -> Download {
        let contents = codec::export_string(self.store.base(), self.store.markers());
        log::info!(
            "Exported {} features",
            self.store.base().len() + self.store.markers().len()
        );
        Download {
            file_name: self.config.export_file_name.clone(),
            mime_type: codec::MIME_TYPE,
            contents,
        }
    }

    /// Action menu entries, present while an existing marker is selected
    pub fn menu(&self) -> Option<Vec<MenuOption>> {
        let marker = self.store.marker(self.presenter.selected()?)?;
        Some(menu_options_for(marker, &self.config.external_link))
    }

    pub fn hover_info(&self) -> Option<HoverInfo<'_>> {
        let hover = self.presenter.hovered()?;
        let marker = self.store.marker(hover.marker)?;
        Some(HoverInfo {
            position: hover.display_position,
            text: marker.display_info(),
        })
    }

    pub fn view(&self) -> View<'_> {
        View {
            base: self.store.base(),
            markers: self.store.markers(),
            mode: self.mode,
            hover: self.hover_info(),
            menu: self.menu(),
        }
    }
}
