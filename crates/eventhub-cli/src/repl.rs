//! Interactive REPL (Read-Eval-Print Loop) for EventHub.

use std::path::{Path, PathBuf};

use eventhub_core::{Action, AppState, Hub};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper, Result as RlResult};
use tracing::debug;

use crate::render;

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "search").
    pub name: &'static str,
    /// Command aliases (e.g., ["s"]).
    pub aliases: &'static [&'static str],
    /// Brief one-line description.
    pub brief: &'static str,
    /// Usage syntax.
    pub usage: &'static str,
}

/// Static help entries for all commands.
static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "search",
        aliases: &["s"],
        brief: "Search event titles (case-insensitive); no term clears",
        usage: "/search [term]",
    },
    CommandHelp {
        name: "date",
        aliases: &["d"],
        brief: "Show only events on a date; no date clears",
        usage: "/date [YYYY-MM-DD]",
    },
    CommandHelp {
        name: "category",
        aliases: &["cat"],
        brief: "Show only one category; no name means all",
        usage: "/category [name]",
    },
    CommandHelp {
        name: "location",
        aliases: &["loc"],
        brief: "Show only one location; no name means all",
        usage: "/location [name]",
    },
    CommandHelp {
        name: "clear",
        aliases: &[],
        brief: "Clear every filter",
        usage: "/clear",
    },
    CommandHelp {
        name: "page",
        aliases: &["p"],
        brief: "Go to a page of results",
        usage: "/page <n>",
    },
    CommandHelp {
        name: "categories",
        aliases: &[],
        brief: "List category choices",
        usage: "/categories",
    },
    CommandHelp {
        name: "locations",
        aliases: &[],
        brief: "List location choices",
        usage: "/locations",
    },
    CommandHelp {
        name: "login",
        aliases: &[],
        brief: "Log in",
        usage: "/login <username> <password>",
    },
    CommandHelp {
        name: "logout",
        aliases: &[],
        brief: "Log out",
        usage: "/logout",
    },
    CommandHelp {
        name: "mine",
        aliases: &["my"],
        brief: "Show the events you are registered for",
        usage: "/mine",
    },
    CommandHelp {
        name: "scan",
        aliases: &[],
        brief: "Open the QR scanner (logged in only)",
        usage: "/scan",
    },
    CommandHelp {
        name: "code",
        aliases: &[],
        brief: "Submit a QR code to the open scanner",
        usage: "/code <code>",
    },
    CommandHelp {
        name: "cancel",
        aliases: &[],
        brief: "Close the scanner without scanning",
        usage: "/cancel",
    },
    CommandHelp {
        name: "close",
        aliases: &[],
        brief: "Close the certificate",
        usage: "/close",
    },
    CommandHelp {
        name: "ok",
        aliases: &[],
        brief: "Dismiss a notice",
        usage: "/ok",
    },
    CommandHelp {
        name: "show",
        aliases: &["ls"],
        brief: "Redraw the screen",
        usage: "/show",
    },
    CommandHelp {
        name: "help",
        aliases: &["h", "?"],
        brief: "Show help",
        usage: "/help [command]",
    },
    CommandHelp {
        name: "quit",
        aliases: &["q", "exit"],
        brief: "Exit the REPL",
        usage: "/quit",
    },
];

fn find_help(name: &str) -> Option<&'static CommandHelp> {
    COMMAND_HELP
        .iter()
        .find(|h| h.name == name || h.aliases.contains(&name))
}

/// Tab completion for slash commands.
struct CommandCompleter;

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let prefix = &line[..pos];
        let matches: Vec<Pair> = COMMAND_HELP
            .iter()
            .map(|h| format!("/{}", h.name))
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd,
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

/// Commands available in the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Set the title search term
    Search(String),
    /// Set the date filter
    Date(String),
    /// Set the category filter
    Category(String),
    /// Set the location filter
    Location(String),
    /// Clear every filter
    Clear,
    /// Go to a page
    Page(usize),
    /// List category choices
    Categories,
    /// List location choices
    Locations,
    /// Log in
    Login { username: String, password: String },
    /// Log out
    Logout,
    /// Show my events
    Mine,
    /// Open the scanner
    Scan,
    /// Submit a code
    Code(String),
    /// Close the scanner
    Cancel,
    /// Close the certificate
    Close,
    /// Dismiss the notice
    Ok,
    /// Redraw the screen
    Show,
    /// Show help (optionally for a specific command)
    Help(Option<String>),
    /// Quit the REPL
    Quit,
    /// Unknown or malformed command
    Unknown(String),
    /// Plain text (not a command)
    Text(String),
}

impl ReplCommand {
    /// Parses input into a REPL command.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        let Some(stripped) = input.strip_prefix('/') else {
            return ReplCommand::Text(input.to_string());
        };

        let parts: Vec<&str> = stripped.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim().to_string()).unwrap_or_default();

        match cmd.as_str() {
            "search" | "s" => ReplCommand::Search(arg),
            "date" | "d" => ReplCommand::Date(arg),
            "category" | "cat" => ReplCommand::Category(arg),
            "location" | "loc" => ReplCommand::Location(arg),
            "clear" => ReplCommand::Clear,
            "page" | "p" => match arg.parse() {
                Ok(page) => ReplCommand::Page(page),
                Err(_) => ReplCommand::Unknown("page requires a number".to_string()),
            },
            "categories" => ReplCommand::Categories,
            "locations" => ReplCommand::Locations,
            "login" => Self::parse_login(&arg),
            "logout" => ReplCommand::Logout,
            "mine" | "my" => ReplCommand::Mine,
            "scan" => ReplCommand::Scan,
            "code" => {
                if arg.is_empty() {
                    ReplCommand::Unknown("code requires a value".to_string())
                } else {
                    ReplCommand::Code(arg)
                }
            }
            "cancel" => ReplCommand::Cancel,
            "close" => ReplCommand::Close,
            "ok" => ReplCommand::Ok,
            "show" | "ls" => ReplCommand::Show,
            "help" | "h" | "?" => ReplCommand::Help(Some(arg).filter(|a| !a.is_empty())),
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(cmd),
        }
    }

    fn parse_login(arg: &str) -> Self {
        let parts: Vec<&str> = arg.split_whitespace().collect();
        match parts.as_slice() {
            [username, password] => ReplCommand::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            _ => ReplCommand::Unknown("login requires: /login <username> <password>".to_string()),
        }
    }

    /// The hub action this command dispatches, if any.
    ///
    /// Plain text goes to the scanner while it is open and to the search box
    /// otherwise.
    pub fn action(&self, state: &AppState) -> Option<Action> {
        let action = match self {
            ReplCommand::Search(term) => Action::SetSearchTerm(term.clone()),
            ReplCommand::Date(date) => Action::SetDateFilter(date.clone()),
            ReplCommand::Category(category) => Action::SetCategoryFilter(category.clone()),
            ReplCommand::Location(location) => Action::SetLocationFilter(location.clone()),
            ReplCommand::Clear => Action::ClearFilters,
            ReplCommand::Page(page) => Action::GoToPage(*page),
            ReplCommand::Login { username, password } => Action::Login {
                username: username.clone(),
                password: password.clone(),
            },
            ReplCommand::Logout => Action::Logout,
            ReplCommand::Scan => Action::OpenScanner,
            ReplCommand::Code(code) => Action::SubmitCode(code.clone()),
            ReplCommand::Cancel => Action::CancelScan,
            ReplCommand::Close => Action::CloseCertificate,
            ReplCommand::Ok => Action::AcknowledgeNotice,
            ReplCommand::Text(text) if text.is_empty() => return None,
            ReplCommand::Text(text) if state.qr.is_scanning() => Action::SubmitCode(text.clone()),
            ReplCommand::Text(text) => Action::SetSearchTerm(text.clone()),
            _ => return None,
        };
        Some(action)
    }
}

/// Interactive EventHub session.
pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    hub: Hub,
    state: AppState,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance.
    pub fn new(hub: Hub, state_dir: &Path) -> RlResult<Self> {
        let config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(CommandCompleter));

        let history_path = state_dir.join("repl_history.txt");
        if history_path.exists() {
            let _ = editor.load_history(&history_path);
        }

        Ok(Self {
            editor,
            hub,
            state: AppState::default(),
            history_path: Some(history_path),
        })
    }

    /// Runs the REPL until quit or end of input.
    pub fn run(&mut self) -> RlResult<()> {
        println!("EventHub v{}", env!("CARGO_PKG_VERSION"));
        println!("Type /help for commands, /quit to exit");
        println!();
        self.draw();

        loop {
            let prompt = self.prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    let cmd = ReplCommand::parse(&line);
                    debug!(?cmd, "Parsed command");

                    if self.handle_command(cmd) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = self.editor.save_history(path);
        }

        println!("Goodbye!");
        Ok(())
    }

    fn prompt(&self) -> String {
        if self.state.qr.is_scanning() {
            "scan> ".to_string()
        } else if self.state.session.is_logged_in() {
            format!("{}@eventhub> ", self.state.session.username)
        } else {
            "eventhub> ".to_string()
        }
    }

    fn draw(&self) {
        println!("{}", render::screen(&self.hub.view(&self.state)));
        println!();
    }

    /// Handles one command. Returns true if the REPL should exit.
    fn handle_command(&mut self, cmd: ReplCommand) -> bool {
        if let Some(action) = cmd.action(&self.state) {
            let state = std::mem::take(&mut self.state);
            self.state = self.hub.reduce(state, action);
            self.draw();
            return false;
        }

        match cmd {
            ReplCommand::Quit => return true,
            ReplCommand::Help(topic) => print_help(topic.as_deref()),
            ReplCommand::Categories => {
                for category in &self.hub.filter_options().categories {
                    println!("  {}", category);
                }
            }
            ReplCommand::Locations => {
                for location in &self.hub.filter_options().locations {
                    println!("  {}", location);
                }
            }
            ReplCommand::Mine => {
                let view = self.hub.view(&self.state);
                if !view.logged_in {
                    println!("Log in to see your events.");
                } else if view.my_events.is_empty() {
                    println!("You are not registered for any events.");
                } else {
                    for event in &view.my_events {
                        println!("{}", render::event_card(event, true));
                    }
                }
            }
            ReplCommand::Show | ReplCommand::Text(_) => self.draw(),
            ReplCommand::Unknown(what) => {
                eprintln!("Unknown command: {} (try /help)", what);
            }
            _ => {}
        }
        false
    }
}

fn print_help(topic: Option<&str>) {
    match topic {
        Some(name) => match find_help(name.trim_start_matches('/')) {
            Some(help) => {
                println!("/{} - {}", help.name, help.brief);
                println!("Usage: {}", help.usage);
                if !help.aliases.is_empty() {
                    let aliases: Vec<String> = help.aliases.iter().map(|a| format!("/{}", a)).collect();
                    println!("Aliases: {}", aliases.join(", "));
                }
            }
            None => println!("No help for '{}'", name),
        },
        None => {
            println!("Commands:");
            for help in COMMAND_HELP {
                println!("  {:<34} {}", help.usage, help.brief);
            }
            println!();
            println!("Plain text searches titles, or is scanned while the scanner is open.");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventhub_core::{HubConfig, QrFlow};

    fn hub() -> Hub {
        Hub::with_sample_data(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), HubConfig::default())
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(ReplCommand::parse("/search tech"), ReplCommand::Search("tech".into()));
        assert_eq!(ReplCommand::parse("/s"), ReplCommand::Search(String::new()));
        assert_eq!(
            ReplCommand::parse("/category Technology"),
            ReplCommand::Category("Technology".into())
        );
        assert_eq!(
            ReplCommand::parse("/loc San Francisco"),
            ReplCommand::Location("San Francisco".into())
        );
        assert_eq!(ReplCommand::parse("/date 2024-10-01"), ReplCommand::Date("2024-10-01".into()));
        assert_eq!(ReplCommand::parse("/CLEAR"), ReplCommand::Clear);
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(ReplCommand::parse("/page 2"), ReplCommand::Page(2));
        assert!(matches!(ReplCommand::parse("/page two"), ReplCommand::Unknown(_)));
        assert!(matches!(ReplCommand::parse("/page"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_login() {
        assert_eq!(
            ReplCommand::parse("/login user password"),
            ReplCommand::Login {
                username: "user".into(),
                password: "password".into()
            }
        );
        assert!(matches!(ReplCommand::parse("/login user"), ReplCommand::Unknown(_)));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(ReplCommand::parse("/code 101"), ReplCommand::Code("101".into()));
        assert!(matches!(ReplCommand::parse("/code"), ReplCommand::Unknown(_)));
        assert_eq!(ReplCommand::parse("/help page"), ReplCommand::Help(Some("page".into())));
        assert_eq!(ReplCommand::parse("/help"), ReplCommand::Help(None));
        assert_eq!(ReplCommand::parse("/q"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("/bogus"), ReplCommand::Unknown("bogus".into()));
        assert_eq!(ReplCommand::parse("  jazz "), ReplCommand::Text("jazz".into()));
    }

    #[test]
    fn test_text_routes_to_search_or_scanner() {
        let hub = hub();
        let idle = AppState::default();
        assert_eq!(
            ReplCommand::Text("expo".into()).action(&idle),
            Some(Action::SetSearchTerm("expo".into()))
        );

        let state = hub.reduce(
            idle,
            Action::Login {
                username: "user".into(),
                password: "password".into(),
            },
        );
        let scanning = hub.reduce(state, Action::OpenScanner);
        assert_eq!(scanning.qr, QrFlow::Scanning);
        assert_eq!(
            ReplCommand::Text("101".into()).action(&scanning),
            Some(Action::SubmitCode("101".into()))
        );
    }

    #[test]
    fn test_non_action_commands() {
        let state = AppState::default();
        assert_eq!(ReplCommand::Text(String::new()).action(&state), None);
        assert_eq!(ReplCommand::Help(None).action(&state), None);
        assert_eq!(ReplCommand::Mine.action(&state), None);
        assert_eq!(ReplCommand::Quit.action(&state), None);
    }

    #[test]
    fn test_find_help_by_alias() {
        assert_eq!(find_help("s").map(|h| h.name), Some("search"));
        assert_eq!(find_help("exit").map(|h| h.name), Some("quit"));
        assert!(find_help("nope").is_none());
    }

    #[test]
    fn test_completer_matches_prefix() {
        let completer = CommandCompleter;
        let history = rustyline::history::DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);

        let (start, matches) = completer.complete("/lo", 3, &ctx).unwrap();
        assert_eq!(start, 0);
        let names: Vec<_> = matches.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(names, vec!["/location", "/locations", "/login", "/logout"]);
    }

    #[test]
    fn test_completer_ignores_text() {
        let completer = CommandCompleter;
        let history = rustyline::history::DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);

        let (_, matches) = completer.complete("hello", 5, &ctx).unwrap();
        assert!(matches.is_empty());
    }
}
