use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::domain::{FieldId, FieldKind, GROUP_TYPES};

use super::error::SeedError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub id: FieldId,
    pub value: FieldValue,
    pub dirty: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn new(id: FieldId) -> Self {
        let value = match id.kind() {
            FieldKind::Select => FieldValue::Select {
                options: GROUP_TYPES.iter().map(|label| label.to_string()).collect(),
                selected: None,
            },
            FieldKind::Text | FieldKind::MultiLine | FieldKind::File => {
                FieldValue::Text(String::new())
            }
        };
        Self {
            id,
            value,
            dirty: false,
            error: None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.id.kind()
    }

    /// Text shown in the control; empty when nothing was entered or chosen.
    pub fn display_value(&self) -> &str {
        match &self.value {
            FieldValue::Text(buffer) => buffer.as_str(),
            FieldValue::Select { .. } => self.selected_label().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_value().is_empty()
    }

    pub fn selected_label(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Select { options, selected } => {
                selected.and_then(|idx| options.get(idx)).map(String::as_str)
            }
            FieldValue::Text(_) => None,
        }
    }

    pub fn options(&self) -> Option<(&[String], Option<usize>)> {
        match &self.value {
            FieldValue::Select { options, selected } => Some((options, *selected)),
            FieldValue::Text(_) => None,
        }
    }

    /// The value collected into a candidate; `None` stands for undefined.
    pub fn current_value(&self) -> Option<Value> {
        let text = self.display_value();
        if text.is_empty() {
            None
        } else {
            Some(Value::String(text.to_string()))
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let changed = match &mut self.value {
            FieldValue::Text(buffer) => match key.code {
                KeyCode::Char(ch) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        return false;
                    }
                    buffer.push(ch);
                    true
                }
                KeyCode::Backspace => buffer.pop().is_some(),
                KeyCode::Delete => {
                    let had_text = !buffer.is_empty();
                    buffer.clear();
                    had_text
                }
                _ => false,
            },
            FieldValue::Select { options, selected } => {
                if options.is_empty() {
                    return false;
                }
                let last = options.len() - 1;
                match key.code {
                    KeyCode::Left => {
                        *selected = Some(match *selected {
                            Some(0) | None => last,
                            Some(idx) => idx - 1,
                        });
                        true
                    }
                    KeyCode::Right => {
                        *selected = Some(match *selected {
                            Some(idx) if idx < last => idx + 1,
                            _ => 0,
                        });
                        true
                    }
                    _ => false,
                }
            }
        };
        if changed {
            self.after_edit();
        }
        changed
    }

    /// Start a new line in a multi-line control.
    pub fn insert_newline(&mut self) -> bool {
        if self.kind() != FieldKind::MultiLine {
            return false;
        }
        if let FieldValue::Text(buffer) = &mut self.value {
            buffer.push('\n');
            self.after_edit();
            return true;
        }
        false
    }

    pub fn set_text(&mut self, text: &str) -> bool {
        if let FieldValue::Text(buffer) = &mut self.value
            && buffer.as_str() != text
        {
            *buffer = text.to_string();
            self.after_edit();
            return true;
        }
        false
    }

    pub fn set_selected(&mut self, index: Option<usize>) -> bool {
        if let FieldValue::Select { options, selected } = &mut self.value {
            let bounded = index.filter(|idx| *idx < options.len());
            if *selected != bounded {
                *selected = bounded;
                self.after_edit();
                return true;
            }
        }
        false
    }

    pub fn select_label(&mut self, label: &str) -> Result<bool, SeedError> {
        let position = match &self.value {
            FieldValue::Select { options, .. } => options.iter().position(|opt| opt == label),
            FieldValue::Text(_) => return Err(SeedError::NotAString { field: self.id }),
        };
        match position {
            Some(idx) => Ok(self.set_selected(Some(idx))),
            None => Err(SeedError::UnknownGroupType(label.to_string())),
        }
    }

    pub fn seed_value(&mut self, value: &Value) -> Result<(), SeedError> {
        let text = match value {
            Value::Null => return Ok(()),
            Value::String(text) => text,
            _ => return Err(SeedError::NotAString { field: self.id }),
        };
        match self.value {
            FieldValue::Select { .. } => {
                self.select_label(text)?;
            }
            FieldValue::Text(_) => {
                self.set_text(text);
            }
        }
        Ok(())
    }

    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn after_edit(&mut self) {
        self.dirty = true;
    }
}
