use serde::{Deserialize, Serialize};

/// The kind of an HTML form control, as far as submission is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Free text input (text, email, url, number and unknown input types)
    Text,
    Password,
    Hidden,
    TextArea,
    Select { multiple: bool },
    Checkbox,
    Radio,
    /// A button that submits the form when clicked
    Submit,
    /// `input type="image"`, submitted as click coordinates
    Image,
    /// A button that never submits (`type="button"`, `type="reset"`)
    Button,
    File,
}

impl ControlKind {
    /// List controls hold a set of selected values instead of a single string
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            ControlKind::Select { .. } | ControlKind::Checkbox | ControlKind::Radio
        )
    }

    /// Controls that submit the form when clicked
    pub fn is_submit(&self) -> bool {
        matches!(self, ControlKind::Submit | ControlKind::Image)
    }

    /// Controls whose value is free text
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            ControlKind::Text | ControlKind::Password | ControlKind::Hidden | ControlKind::TextArea
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Password => "password",
            ControlKind::Hidden => "hidden",
            ControlKind::TextArea => "textarea",
            ControlKind::Select { .. } => "select",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Radio => "radio",
            ControlKind::Submit => "submit",
            ControlKind::Image => "image",
            ControlKind::Button => "button",
            ControlKind::File => "file",
        }
    }
}

/// One `<option>` of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// A single control inside a form
#[derive(Debug, Clone)]
pub struct Control {
    /// Unnamed controls are tracked but never submitted
    pub name: Option<String>,
    pub kind: ControlKind,
    /// Current value for scalar controls, the carried value for
    /// checkboxes, radios and buttons
    pub value: String,
    pub options: Vec<SelectOption>,
    pub checked: bool,
    pub readonly: bool,
    pub disabled: bool,
}

impl Control {
    pub fn new(name: Option<String>, kind: ControlKind, value: impl Into<String>) -> Self {
        Self {
            name,
            kind,
            value: value.into(),
            options: Vec::new(),
            checked: false,
            readonly: false,
            disabled: false,
        }
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Whether a write to this control must be refused
    pub fn is_locked(&self) -> bool {
        self.readonly || self.disabled
    }

    /// Values of the currently selected options
    pub fn selected_options(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter().filter(|o| o.selected)
    }
}

/// The value of a form field as read from or written to a form
///
/// Scalar controls carry [`FieldValue::Text`]; selects, checkboxes and
/// radios carry the list of selected values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// A list value holding exactly one selected item
    pub fn single(value: impl Into<String>) -> Self {
        FieldValue::List(vec![value.into()])
    }

    /// A list value with nothing selected
    pub fn none() -> Self {
        FieldValue::List(Vec::new())
    }

    /// True when no meaningful data is present: empty text, an empty
    /// selection, or only the blank option selected
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.iter().all(|item| item.is_empty()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{:?}", text),
            FieldValue::List(items) => write!(f, "{:?}", items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(FieldValue::text("").is_blank());
        assert!(FieldValue::none().is_blank());
        assert!(FieldValue::single("").is_blank());
        assert!(!FieldValue::single("3").is_blank());
        assert!(!FieldValue::text("1999").is_blank());
    }

    #[test]
    fn test_field_value_deserializes_untagged() {
        let text: FieldValue = serde_json::from_str(r#""hello""#).unwrap();
        assert_eq!(text, FieldValue::text("hello"));

        let list: FieldValue = serde_json::from_str(r#"["1", "2"]"#).unwrap();
        assert_eq!(list, FieldValue::List(vec!["1".to_string(), "2".to_string()]));
    }

    #[test]
    fn test_list_kinds() {
        assert!(ControlKind::Select { multiple: false }.is_list());
        assert!(ControlKind::Checkbox.is_list());
        assert!(!ControlKind::Hidden.is_list());
        assert!(ControlKind::TextArea.is_scalar());
        assert!(!ControlKind::Submit.is_scalar());
    }
}
