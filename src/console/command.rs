//! Console command parsing.

use crate::error::AdminError;
use crate::traits::FormField;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Views,
    Use(String),
    List,
    Refresh,
    Add,
    Edit(String),
    Set(FormField, String),
    Save,
    Close,
    Browse,
    /// Pick entry `n` of the path picker; 0 goes to the parent directory.
    Pick(usize),
    Remove(String),
    Show,
    Quit,
}

/// Help text printed by `help`.
pub const HELP: &str = "\
Commands:
  views                 list the available views
  use <view>            switch to another view
  list                  print the folders of the current view
  refresh               reload the folders from the server
  add                   open the add form (inline views: submit the form)
  edit <id>             load a folder into the form
  set <field> <value>   set a form field: id, name (or label), path
  save                  create or update the folder in the form
  close                 close the form
  browse                list directories under the path field
  pick <n>              use directory n from the last listing (0: parent)
  remove <id>           remove a folder, after confirmation
  show                  print the rendered HTML of the current view
  help                  print this help
  quit                  leave the console";

/// Parse a line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, AdminError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "views" => Command::Views,
        "use" => Command::Use(required(word, rest, "<view>")?),
        "list" | "ls" => Command::List,
        "refresh" => Command::Refresh,
        "add" => Command::Add,
        "edit" => Command::Edit(required(word, rest, "<id>")?),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            let field = match field.to_ascii_lowercase().as_str() {
                "id" => FormField::Id,
                "name" | "label" => FormField::Name,
                "path" => FormField::Path,
                "" => return Err(usage("set <field> <value>")),
                other => {
                    return Err(AdminError::Command(format!(
                        "unknown field '{}' (expected id, name, label or path)",
                        other
                    )))
                }
            };
            Command::Set(field, value.to_string())
        }
        "save" => Command::Save,
        "close" | "cancel" => Command::Close,
        "browse" => Command::Browse,
        "pick" => {
            let n = required(word, rest, "<n>")?;
            let index = n
                .parse::<usize>()
                .map_err(|_| AdminError::Command(format!("'{}' is not a number", n)))?;
            Command::Pick(index)
        }
        "remove" | "rm" => Command::Remove(required(word, rest, "<id>")?),
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(AdminError::Command(format!(
                "unknown command '{}', type help for the list",
                other
            )))
        }
    };
    Ok(Some(command))
}

fn required(word: &str, rest: &str, placeholder: &str) -> Result<String, AdminError> {
    if rest.is_empty() {
        Err(usage(&format!("{} {}", word, placeholder)))
    } else {
        Ok(rest.to_string())
    }
}

fn usage(text: &str) -> AdminError {
    AdminError::Command(format!("usage: {}", text))
}
