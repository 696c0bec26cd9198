//! Event scripts: one user action per line.
//!
//! ```text
//! # comments and blank lines are ignored
//! open data/horse.fits
//! search M42 / DSS2 Red
//! scaling Logarithmic
//! colormap viridis
//! invert on
//! save m42.png
//! about
//! ```

use anyhow::{anyhow, bail, Context, Result};
use display_session::{Notification, UiEvent, ViewerController};
use renderer::RenderSurface;
use sky_common::ScalingMode;
use std::path::PathBuf;
use tracing::debug;

/// Parse one script line. Blank lines and comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<UiEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let require = |what: &'static str| argument(command, rest, what);

    let event = match command.to_lowercase().as_str() {
        "open" => UiEvent::Open(PathBuf::from(require("a file path")?)),
        "search" => {
            let query = require("'<object> / <survey>'")?;
            let (object, survey) = query
                .rsplit_once('/')
                .ok_or_else(|| anyhow!("expected 'search <object> / <survey>', got '{}'", query))?;
            UiEvent::Search {
                object: object.trim().to_string(),
                survey: survey.trim().to_string(),
            }
        }
        "scaling" => UiEvent::Scaling(require("a mode")?.parse::<ScalingMode>()?),
        "colormap" => UiEvent::Colormap(require("a colormap name")?.to_string()),
        "invert" => UiEvent::Invert(parse_switch(require("on or off")?)?),
        "save" => UiEvent::Save(PathBuf::from(require("a file path")?)),
        "about" => UiEvent::About,
        other => bail!("unknown command '{}'", other),
    };
    Ok(Some(event))
}

fn argument<'a>(command: &str, rest: &'a str, what: &str) -> Result<&'a str> {
    if rest.is_empty() {
        bail!("'{}' needs {}", command, what);
    }
    Ok(rest)
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => bail!("expected on or off, got '{}'", value),
    }
}

/// Parse a whole script, numbering lines from 1.
pub fn parse_script(text: &str) -> Result<Vec<(usize, UiEvent)>> {
    let mut events = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(event) = parse_line(line).with_context(|| format!("line {}", i + 1))? {
            events.push((i + 1, event));
        }
    }
    Ok(events)
}

/// Apply events in order, collecting the notifications they raise.
///
/// A failing event does not stop the script.
pub async fn run_script<S: RenderSurface>(
    controller: &mut ViewerController<S>,
    events: Vec<(usize, UiEvent)>,
) -> Vec<(usize, Notification)> {
    let mut notifications = Vec::new();
    for (line, event) in events {
        debug!(line, event = ?event, "Running script event");
        if let Some(notification) = controller.handle(event).await {
            notifications.push((line, notification));
        }
    }
    notifications
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line("open /data/m31.fits").unwrap(),
            Some(UiEvent::Open(PathBuf::from("/data/m31.fits")))
        );
        assert_eq!(
            parse_line("  scaling log ").unwrap(),
            Some(UiEvent::Scaling(ScalingMode::Logarithmic))
        );
        assert_eq!(
            parse_line("colormap viridis").unwrap(),
            Some(UiEvent::Colormap("viridis".into()))
        );
        assert_eq!(parse_line("invert on").unwrap(), Some(UiEvent::Invert(true)));
        assert_eq!(parse_line("INVERT off").unwrap(), Some(UiEvent::Invert(false)));
        assert_eq!(parse_line("about").unwrap(), Some(UiEvent::About));
    }

    #[test]
    fn test_parse_search_with_spaces() {
        assert_eq!(
            parse_line("search Crab Nebula / DSS2 Red").unwrap(),
            Some(UiEvent::Search {
                object: "Crab Nebula".into(),
                survey: "DSS2 Red".into(),
            })
        );
    }

    #[test]
    fn test_comments_and_blanks() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # open x.fits").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_line("open").is_err());
        assert!(parse_line("search M42").is_err());
        assert!(parse_line("scaling cubic").is_err());
        assert!(parse_line("invert maybe").is_err());
        assert!(parse_line("zoom 2").is_err());
    }

    #[test]
    fn test_script_line_numbers() {
        let events = parse_script("# demo\nopen a.fits\n\nsave a.png\n").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, 2);
        assert_eq!(events[1].0, 4);

        let err = parse_script("open a.fits\nbogus\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2");
    }
}
