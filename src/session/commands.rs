//! Text commands for the interactive shell
//!
//! Maps one input line to a session message or a host-level command, the
//! same way key bindings map to messages in a windowed front end.

use std::path::PathBuf;

use super::messages::Msg;
use crate::domain::MarkerId;

pub const HELP: &str = "\
commands:
  open <path>            load a GeoJSON file
  edit                   toggle edit mode
  add | delete           choose the edit sub-mode
  save                   leave edit mode and close the menu
  click <x> <y>          click the map (working coordinates)
  marker <id>            click a marker
  hover <id> <sx> <sy>   move the cursor onto a marker (screen pixels)
  leave                  move the cursor off the marker
  menu <n>               pick entry n (1-based) of the open menu
  close                  close the menu
  export [path]          write the merged document
  show                   print the current state
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Session(Msg),
    Open(PathBuf),
    Export(Option<PathBuf>),
    Show,
    Help,
    Quit,
}

/// Parse a shell line; `None` for blank, unknown or malformed input
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    let args: Vec<&str> = words.collect();

    let command = match (command, args.as_slice()) {
        ("open", [path]) => Command::Open(PathBuf::from(path)),
        ("edit", []) => Command::Session(Msg::toggle_edit()),
        ("add", []) => Command::Session(Msg::enter_add()),
        ("delete", []) => Command::Session(Msg::enter_delete()),
        ("save", []) => Command::Session(Msg::save()),
        ("click", [x, y]) => Command::Session(Msg::map_click(x.parse().ok()?, y.parse().ok()?)),
        ("marker", [id]) => Command::Session(Msg::marker_click(MarkerId(id.parse().ok()?))),
        ("hover", [id, x, y]) => Command::Session(Msg::hover_enter(
            MarkerId(id.parse().ok()?),
            x.parse().ok()?,
            y.parse().ok()?,
        )),
        ("leave", []) => Command::Session(Msg::hover_leave()),
        ("menu", [n]) => {
            let n: usize = n.parse().ok()?;
            Command::Session(Msg::invoke(n.checked_sub(1)?))
        }
        ("close", []) => Command::Session(Msg::close_menu()),
        ("export", []) => Command::Export(None),
        ("export", [path]) => Command::Export(Some(PathBuf::from(path))),
        ("show", []) => Command::Show,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => return None,
    };
    Some(command)
}
