//! Turns one line of user input into a message for the core.

use dashboard_core::{EntityKind, FormKind, ListAction, Msg, Page};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  open <page>          freelancers, jobs, news, orders, products, purchases, vendors,
                       or new-vendor, new-order, new-product, new-purchase
  search [text]        filter rows by text (empty clears)
  filter <value>       status or category, `all` to clear
  next | prev          change page
  menu <id>            open or close a row's action menu
  edit <id>            request an edit of a row
  delete <id>          remove a row
  add                  open the add form of the current list
  set <field> [value]  edit a form field
  submit | reset       submit or clear the current form
  dismiss              hide the notice
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help` for the list")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("unknown page {0:?}")]
    UnknownPage(String),
}

/// Parses a page name: an entity list (`jobs`) or an add form (`new-vendor`).
pub fn parse_page(name: &str) -> Result<Page, CommandError> {
    let wanted = name.trim().to_lowercase();
    if let Some(noun) = wanted.strip_prefix("new-") {
        return FormKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == noun)
            .map(Page::Form)
            .ok_or_else(|| CommandError::UnknownPage(name.to_string()));
    }
    EntityKind::ALL
        .into_iter()
        .find(|kind| kind.title().to_lowercase() == wanted)
        .map(Page::List)
        .ok_or_else(|| CommandError::UnknownPage(name.to_string()))
}

/// Returns `Ok(None)` for blank lines.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let arg = |command: &'static str, what: &'static str| {
        if rest.is_empty() {
            Err(CommandError::MissingArgument { command, what })
        } else {
            Ok(rest.to_string())
        }
    };

    let msg = match word.to_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "exit" => return Ok(Some(Command::Quit)),
        "open" => Msg::Navigate(parse_page(&arg("open", "a page name")?)?),
        "search" => Msg::List(ListAction::Search(rest.to_string())),
        "filter" => Msg::List(ListAction::Filter(arg("filter", "a value")?)),
        "next" => Msg::List(ListAction::NextPage),
        "prev" => Msg::List(ListAction::PrevPage),
        "menu" => Msg::List(ListAction::ToggleMenu(arg("menu", "a row id")?)),
        "edit" => Msg::List(ListAction::Edit(arg("edit", "a row id")?)),
        "delete" => Msg::List(ListAction::Delete(arg("delete", "a row id")?)),
        "add" => Msg::AddNewClicked,
        "set" => {
            let rest = arg("set", "a field name")?;
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map_or((rest.as_str(), ""), |(field, value)| (field, value.trim()));
            Msg::FieldChanged {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "submit" => Msg::SubmitClicked,
        "reset" => Msg::ResetClicked,
        "dismiss" => Msg::DismissNotice,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(Command::Dispatch(msg)))
}
