//! Interactive session: a history stack of mounted screens driven by
//! one-line commands.
//!
//! Each screen owns the store it mounted. Going back pops the top screen and
//! drops its store; the screen underneath keeps whatever it had loaded.
//!
//! 交互会话：以栈保存已挂载的界面，返回时上一界面的状态保持不变。

use std::sync::Arc;

use cv_app::{App, DetailLoader, DisplayPreferenceStore, IncrementalListStore, LoadOutcome};
use cv_core::{EntryId, KNOWN_CATEGORIES};
use thiserror::Error;
use tracing::{debug, info};

use crate::view::{render_detail, render_list, Route, RouteError};

pub const HELP_TEXT: &str = "\
Commands:
  more              load the next page (list only)
  filter <tag|all>  show only entries with that type; `all` shows everything
  filter            clear the filter
  types             list the known type tags
  open <id>         open the detail view for an entry
  go <path>         navigate to `/` or `/item/<id>`
  back              return to the previous screen
  theme             toggle between light and dark
  help              show this text
  quit              leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    More,
    Filter(String),
    ClearFilter,
    Types,
    Open(EntryId),
    Go(String),
    Back,
    Theme,
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(Self::Nothing);
        };
        let arg = words.next();

        let command = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("more", _) => Self::More,
            ("filter", Some(tag)) => Self::Filter(tag.to_string()),
            ("filter", None) => Self::ClearFilter,
            ("types", _) => Self::Types,
            ("open", Some(id)) => Self::Open(EntryId::from(id)),
            ("open", None) => return Err(CommandError::MissingArgument("open")),
            ("go", Some(path)) => Self::Go(path.to_string()),
            ("go", None) => return Err(CommandError::MissingArgument("go")),
            ("back", _) => Self::Back,
            ("theme", _) => Self::Theme,
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit" | "q", _) => Self::Quit,
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// What the run loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Render(String),
    Exit,
}

enum Screen {
    List(IncrementalListStore),
    Detail { id: EntryId, loader: DetailLoader },
}

pub struct Session {
    app: App,
    display: Arc<DisplayPreferenceStore>,
    history: Vec<Screen>,
}

impl Session {
    pub fn new(app: App) -> Self {
        let display = app.display_preference();
        Self {
            app,
            display,
            history: Vec::new(),
        }
    }

    pub fn display(&self) -> &DisplayPreferenceStore {
        &self.display
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Route currently on top of the history, if any.
    pub fn current_route(&self) -> Option<Route> {
        match self.history.last()? {
            Screen::List(_) => Some(Route::List),
            Screen::Detail { id, .. } => Some(Route::Detail(id.clone())),
        }
    }

    /// Mount the screen for `route`.
    ///
    /// The list keeps its state if it is already in the history; the first
    /// visit mounts a fresh store and loads page 1.
    pub async fn navigate(&mut self, route: Route) {
        info!(route = %route, "Navigate");
        match route {
            Route::List => {
                if let Some(index) = self
                    .history
                    .iter()
                    .rposition(|screen| matches!(screen, Screen::List(_)))
                {
                    self.unmount_above(index);
                    return;
                }
                let store = self.app.mount_list();
                store.load_next_page().await;
                self.history.push(Screen::List(store));
            }
            Route::Detail(id) => {
                let loader = self.app.mount_detail();
                if let Err(err) = loader.load(id.clone()).await {
                    debug!(error = %err, "Detail view shows failure");
                }
                self.history.push(Screen::Detail { id, loader });
            }
        }
    }

    /// Parse `path` and navigate; unknown paths leave the history untouched.
    pub async fn go(&mut self, path: &str) -> Result<(), RouteError> {
        let route = Route::parse(path)?;
        self.navigate(route).await;
        Ok(())
    }

    pub fn render(&self) -> String {
        let profile = self.display.current();
        match self.history.last() {
            Some(Screen::List(store)) => render_list(&store.snapshot(), profile),
            Some(Screen::Detail { loader, .. }) => render_detail(&loader.phase(), profile),
            None => String::new(),
        }
    }

    pub async fn handle_line(&mut self, line: &str) -> Flow {
        match Command::parse(line) {
            Ok(command) => self.handle(command).await,
            Err(err) => Flow::Render(format!("{err}\n")),
        }
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => return Flow::Exit,
            Command::Nothing => {}
            Command::Help => return Flow::Render(HELP_TEXT.to_string()),
            Command::Types => return Flow::Render(format!("{}\n", KNOWN_CATEGORIES.join(" "))),
            Command::More => match self.history.last() {
                Some(Screen::List(store)) => {
                    if store.load_next_page().await == LoadOutcome::AlreadyLoading {
                        debug!("Load more ignored while a page is loading");
                    }
                }
                _ => return Flow::Render("`more` only works on the list\n".to_string()),
            },
            Command::Filter(tag) => match self.history.last() {
                Some(Screen::List(store)) => store.set_filter(tag.as_str()),
                _ => return Flow::Render("`filter` only works on the list\n".to_string()),
            },
            Command::ClearFilter => match self.history.last() {
                Some(Screen::List(store)) => store.set_filter(""),
                _ => return Flow::Render("`filter` only works on the list\n".to_string()),
            },
            Command::Open(id) => self.navigate(Route::Detail(id)).await,
            Command::Go(path) => {
                if let Err(err) = self.go(&path).await {
                    return Flow::Render(format!("{err}\n"));
                }
            }
            Command::Back => {
                if self.history.len() < 2 {
                    return Flow::Render("Nothing to go back to\n".to_string());
                }
                self.unmount_above(self.history.len() - 2);
            }
            Command::Theme => {
                self.display.toggle();
            }
        }
        Flow::Render(self.render())
    }

    fn unmount_above(&mut self, index: usize) {
        for screen in self.history.drain(index + 1..) {
            match screen {
                Screen::List(store) => store.reset(),
                Screen::Detail { loader, .. } => loader.reset(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("more"), Ok(Command::More));
        assert_eq!(Command::parse("  MORE "), Ok(Command::More));
        assert_eq!(Command::parse("filter fire"), Ok(Command::Filter("fire".into())));
        assert_eq!(Command::parse("filter"), Ok(Command::ClearFilter));
        assert_eq!(Command::parse("open 25"), Ok(Command::Open(EntryId::from("25"))));
        assert_eq!(Command::parse("go /item/4"), Ok(Command::Go("/item/4".into())));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse(""), Ok(Command::Nothing));
    }

    #[test]
    fn test_parse_rejects_unknown_and_incomplete() {
        assert_eq!(
            Command::parse("jump"),
            Err(CommandError::Unknown("jump".into()))
        );
        assert_eq!(
            Command::parse("open"),
            Err(CommandError::MissingArgument("open"))
        );
        assert_eq!(Command::parse("go"), Err(CommandError::MissingArgument("go")));
    }
}
