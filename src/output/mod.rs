use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Where CLI results go: a human line or a pretty JSON document on stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        println!("{}", self.render(text_line, json_value)?);
        Ok(())
    }

    fn render<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<String> {
        match self.mode {
            OutputMode::Text => Ok(text_line.to_string()),
            OutputMode::Json => Ok(serde_json::to_string_pretty(json_value)?),
        }
    }
}
