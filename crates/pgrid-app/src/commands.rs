// ABOUTME: Text commands understood by the grid driver.
// ABOUTME: Parses one script line into an action on the grid.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use pgrid_layout::{DocumentId, FocusDirection, SplitAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show a document, reusing a pane that already has it
    Open(DocumentId),
    /// Close the active view of the focused pane
    Close,
    /// Split or move the active view of the focused pane
    Split(SplitAction),
    Focus(FocusDirection),
    InsertBefore,
    InsertAfter,
    /// Remove the focused pane, views and all
    Remove,
    Resize(u32),
    Reflow,
    Show,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let arg = words.next();
        if let Some(extra) = words.next() {
            bail!("unexpected argument '{}' to {}", extra, name);
        }

        let command = match (name, arg) {
            ("open", Some(doc)) => {
                let doc = doc
                    .parse()
                    .with_context(|| format!("invalid document id '{}'", doc))?;
                Command::Open(DocumentId(doc))
            }
            ("close", None) => Command::Close,
            ("split-left", None) => Command::Split(SplitAction::SplitLeft),
            ("split-right", None) => Command::Split(SplitAction::SplitRight),
            ("move-left", None) => Command::Split(SplitAction::MoveLeft),
            ("move-right", None) => Command::Split(SplitAction::MoveRight),
            ("focus", Some(dir)) => Command::Focus(parse_direction(dir)?),
            ("insert-before", None) => Command::InsertBefore,
            ("insert-after", None) => Command::InsertAfter,
            ("remove", None) => Command::Remove,
            ("resize", Some(extent)) => {
                let extent = extent
                    .parse()
                    .with_context(|| format!("invalid extent '{}'", extent))?;
                Command::Resize(extent)
            }
            ("reflow", None) => Command::Reflow,
            ("show", None) => Command::Show,
            (name, _) => bail!("unknown or malformed command '{}'", name),
        };
        Ok(command)
    }
}

fn parse_direction(word: &str) -> Result<FocusDirection> {
    Ok(match word {
        "left" => FocusDirection::Left,
        "right" => FocusDirection::Right,
        "up" => FocusDirection::Up,
        "down" => FocusDirection::Down,
        "prev" => FocusDirection::TabBackward,
        "next" => FocusDirection::TabForward,
        other => bail!("unknown direction '{}'", other),
    })
}

/// Parse a script line. Blank lines and `#` comments yield None.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            "open 12".parse::<Command>().unwrap(),
            Command::Open(DocumentId(12))
        );
        assert_eq!(
            "resize 640".parse::<Command>().unwrap(),
            Command::Resize(640)
        );
        assert_eq!(
            "focus next".parse::<Command>().unwrap(),
            Command::Focus(FocusDirection::TabForward)
        );
        assert_eq!(
            "move-right".parse::<Command>().unwrap(),
            Command::Split(SplitAction::MoveRight)
        );
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!("open".parse::<Command>().is_err());
        assert!("open abc".parse::<Command>().is_err());
        assert!("close now".parse::<Command>().is_err());
        assert!("focus sideways".parse::<Command>().is_err());
        assert!("explode".parse::<Command>().is_err());
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# split it").unwrap(), None);
        assert_eq!(parse_line("  show  ").unwrap(), Some(Command::Show));
    }
}
