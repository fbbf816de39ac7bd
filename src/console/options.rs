//! Console session options, changed at runtime with `set <name> <value>`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionError {
    UnknownOption { name: String },
    InvalidValue { name: String, value: String },
}

impl fmt::Display for OptionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionError::UnknownOption { name } => write!(f, "unknown option '{name}'"),
            OptionError::InvalidValue { name, value } => {
                write!(f, "invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for OptionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Print the diagram after every accepted move
    pub show_board: bool,
    /// Rank and file labels around the diagram
    pub coordinates: bool,
    /// Seed for the `random` command; entropy when unset
    pub seed: Option<u64>,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            show_board: true,
            coordinates: true,
            seed: None,
        }
    }
}

/// Action the console must take after an option changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionAction {
    ReseedRng(Option<u64>),
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl ConsoleOptions {
    pub fn apply(&mut self, name: &str, value: Option<&str>) -> Result<Option<OptionAction>, OptionError> {
        let invalid = || OptionError::InvalidValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };

        match name.trim().to_ascii_lowercase().as_str() {
            "board" => {
                self.show_board = value.and_then(parse_switch).ok_or_else(invalid)?;
            }
            "coordinates" => {
                self.coordinates = value.and_then(parse_switch).ok_or_else(invalid)?;
            }
            "seed" => {
                self.seed = match value {
                    None | Some("none") => None,
                    Some(v) => Some(v.parse::<u64>().map_err(|_| invalid())?),
                };
                return Ok(Some(OptionAction::ReseedRng(self.seed)));
            }
            _ => {
                return Err(OptionError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(None)
    }

    pub fn describe(&self) -> String {
        let seed = self
            .seed
            .map_or_else(|| "none".to_string(), |s| s.to_string());
        format!(
            "board {} coordinates {} seed {}",
            if self.show_board { "on" } else { "off" },
            if self.coordinates { "on" } else { "off" },
            seed
        )
    }
}
