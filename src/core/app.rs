use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::codec;
use crate::config::GeoMarkConfig;
use crate::domain::{MarkerId, MenuAction};
use crate::session::commands::{Command, HELP, parse_command};
use crate::session::messages::{Download, Effect, Msg};
use crate::session::prompt::InfoPrompt;
use crate::session::state::Session;

pub(crate) fn run(config: GeoMarkConfig, initial: Option<PathBuf>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(config, Console::new(stdin.lock(), stdout.lock()));
    if let Some(path) = initial {
        app.open(&path)?;
    }
    app.run()
}

/// Line-based terminal: reads commands and prompt answers, prints output
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without the line terminator; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// An empty answer keeps the pre-filled value, end of input cancels
impl<R: BufRead, W: Write> InfoPrompt for Console<R, W> {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        let shown = write!(self.output, "{message} [{default}] ")
            .and_then(|_| self.output.flush());
        if let Err(err) = shown {
            log::error!("Failed to show prompt: {err}");
            return None;
        }
        match self.read_line() {
            Ok(Some(answer)) if answer.is_empty() => Some(default.to_string()),
            Ok(Some(answer)) => Some(answer),
            Ok(None) => None,
            Err(err) => {
                log::error!("Failed to read prompt answer: {err}");
                None
            }
        }
    }
}

/// Interactive host standing in for the map UI
pub struct App<R, W> {
    pub session: Session,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: GeoMarkConfig, console: Console<R, W>) -> Self {
        Self {
            session: Session::new(config),
            console,
        }
    }

    /// Process commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.console.output, "> ")?;
            self.console.output.flush()?;
            let Some(line) = self.console.read_line()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.execute(command)?,
                None => writeln!(self.console.output, "unknown command, try `help`")?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Session(msg) => self.dispatch(msg),
            Command::Open(path) => self.open(&path),
            Command::Export(path) => {
                let effect = self.session.update(Msg::export(), &mut self.console);
                match effect {
                    Effect::Download(download) => self.save_download(download, path),
                    other => self.apply(other),
                }
            }
            Command::Show => self.show(),
            Command::Help => Ok(writeln!(self.console.output, "{HELP}")?),
            Command::Quit => Ok(()),
        }
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let effect = self.session.update(msg, &mut self.console);
        self.apply(effect)
    }

    /// Read a file from disk and hand its text to the session
    pub fn open(&mut self, path: &Path) -> Result<()> {
        if path.extension().and_then(|e| e.to_str()) != Some(codec::EXTENSION) {
            log::warn!("{} does not have a .{} extension", path.display(), codec::EXTENSION);
        }
        match fs::read_to_string(path) {
            Ok(raw) => self.dispatch(Msg::import(raw)),
            Err(err) => {
                writeln!(self.console.output, "Cannot read {}: {err}", path.display())?;
                Ok(())
            }
        }
    }

    fn apply(&mut self, effect: Effect) -> Result<()> {
        let out = &mut self.console.output;
        match effect {
            Effect::None => {}
            Effect::FitView {
                extent,
                duration_ms,
            } => {
                let center = extent.center().unwrap_or_default();
                writeln!(
                    out,
                    "View fitted to [{:.1}, {:.1}, {:.1}, {:.1}] centered on ({:.1}, {:.1}) over {duration_ms} ms",
                    extent.min_x, extent.min_y, extent.max_x, extent.max_y, center.x, center.y
                )?
            }
            Effect::ShowMenu(options) => {
                writeln!(out, "Menu:")?;
                for (n, option) in options.iter().enumerate() {
                    writeln!(out, "  {}) {}", n + 1, option.label)?;
                }
                writeln!(out, "  close) Close")?;
            }
            Effect::HideMenu => writeln!(out, "Menu closed")?,
            Effect::RunAction { marker, action } => self.run_action(marker, action)?,
            Effect::Download(download) => self.save_download(download, None)?,
            Effect::Notify(message) => writeln!(out, "{message}")?,
        }
        Ok(())
    }

    fn run_action(&mut self, marker: MarkerId, action: MenuAction) -> Result<()> {
        log::info!("Menu action {action:?} on marker {marker}");
        let out = &mut self.console.output;
        match action {
            MenuAction::NewFeature => writeln!(out, "New Feature clicked")?,
            MenuAction::Info => {
                let info = self
                    .session
                    .store
                    .marker(marker)
                    .map(|m| m.display_info())
                    .unwrap_or("No info available");
                writeln!(out, "Info: {info}")?
            }
            MenuAction::NewSettings => writeln!(out, "New Settings clicked")?,
            MenuAction::OpenLink(url) => writeln!(out, "Open {url}")?,
        }
        Ok(())
    }

    fn save_download(&mut self, download: Download, path: Option<PathBuf>) -> Result<()> {
        let path = path.unwrap_or_else(|| self.session.config.export_path());
        if let Err(err) = fs::write(&path, &download.contents) {
            log::warn!("Failed to write {}: {err}", path.display());
            writeln!(self.console.output, "Cannot write {}: {err}", path.display())?;
            return Ok(());
        }
        log::info!("Saved export to {}", path.display());
        writeln!(
            self.console.output,
            "Saved {} ({})",
            path.display(),
            download.mime_type
        )?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let view = self.session.view();
        let out = &mut self.console.output;
        writeln!(
            out,
            "edit={} add={} delete={}",
            view.mode.is_edit(),
            view.mode.is_add(),
            view.mode.is_delete()
        )?;
        writeln!(out, "{} base features", view.base.len())?;
        for feature in view.base {
            if let Some(name) = feature.attribute("name").and_then(|v| v.as_str()) {
                writeln!(out, "  {name}")?;
            }
        }
        for marker in view.markers {
            writeln!(
                out,
                "marker {} at ({:.1}, {:.1}): {}",
                marker.id,
                marker.position.x,
                marker.position.y,
                marker.display_info()
            )?;
        }
        if let Some(hover) = &view.hover {
            writeln!(
                out,
                "info box at ({:.0}, {:.0}): {}",
                hover.position.x, hover.position.y, hover.text
            )?;
        }
        if let Some(menu) = &view.menu {
            let labels: Vec<&str> = menu.iter().map(|o| o.label.as_str()).collect();
            writeln!(out, "menu: {}", labels.join(", "))?;
        }
        Ok(())
    }
}
