mod control;
mod parse;

pub use control::{Control, ControlKind, FieldValue, SelectOption};

use crate::{Error, Result};
use url::Url;

/// An HTML form scraped from a page, with its controls in document order
///
/// The form is a detached copy: reads and writes act on local state only,
/// and [`HtmlForm::submission`] produces the request a browser would send.
#[derive(Debug, Clone)]
pub struct HtmlForm {
    name: Option<String>,
    id: Option<String>,
    action: Url,
    method: String,
    enctype: String,
    source: Url,
    controls: Vec<Control>,
}

/// The request produced by submitting a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub method: String,
    pub url: Url,
    pub pairs: Vec<(String, String)>,
    /// The page the form was scraped from
    pub referer: Url,
}

impl Submission {
    pub fn is_post(&self) -> bool {
        self.method == "POST"
    }

    /// Target URL for a GET submission: the action with its query replaced
    /// by the form data
    pub fn query_url(&self) -> Url {
        let mut url = self.url.clone();
        url.set_query(None);
        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(self.pairs.iter());
        }
        url
    }

    /// The form data as an `application/x-www-form-urlencoded` body
    pub fn encoded_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl HtmlForm {
    /// Build a form by hand, mostly useful for tests
    pub fn new(action: Url, method: &str, controls: Vec<Control>) -> Self {
        Self {
            name: None,
            id: None,
            source: action.clone(),
            action,
            method: method.to_ascii_uppercase(),
            enctype: "application/x-www-form-urlencoded".to_string(),
            controls,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn action(&self) -> &Url {
        &self.action
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn enctype(&self) -> &str {
        &self.enctype
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn is_post(&self) -> bool {
        self.method == "POST"
    }

    /// Substring match on the absolute action URL
    pub fn action_contains(&self, fragment: &str) -> bool {
        self.action.as_str().contains(fragment)
    }

    pub fn has_control(&self, name: &str) -> bool {
        self.controls.iter().any(|c| c.has_name(name))
    }

    fn first(&self, name: &str) -> Result<&Control> {
        self.controls
            .iter()
            .find(|c| c.has_name(name))
            .ok_or_else(|| Error::ControlNotFound(name.to_string()))
    }

    /// The first list control with this name, else the first control of any kind
    fn first_list(&self, name: &str) -> Result<&Control> {
        match self.controls.iter().find(|c| c.has_name(name) && c.kind.is_list()) {
            Some(control) => Ok(control),
            None => self.first(name),
        }
    }

    /// Read the current value of a field
    ///
    /// Checkboxes and radios sharing a name are read as one list control,
    /// which takes precedence over a hidden input of the same name.
    pub fn value(&self, name: &str) -> Result<FieldValue> {
        let first = self.first_list(name)?;
        let value = match first.kind {
            ControlKind::Select { .. } => FieldValue::List(
                first
                    .selected_options()
                    .map(|option| option.value.clone())
                    .collect(),
            ),
            ControlKind::Checkbox | ControlKind::Radio => FieldValue::List(
                self.controls
                    .iter()
                    .filter(|c| c.has_name(name) && c.kind.is_list() && c.checked)
                    .map(|c| c.value.clone())
                    .collect(),
            ),
            _ => FieldValue::Text(first.value.clone()),
        };
        Ok(value)
    }

    /// Read a scalar (text-like) field
    pub fn text(&self, name: &str) -> Result<&str> {
        let control = self.first(name)?;
        if !control.kind.is_scalar() {
            return Err(Error::ControlType {
                name: name.to_string(),
                expected: "text",
            });
        }
        Ok(&control.value)
    }

    /// Read the selected values of a list field
    pub fn selected(&self, name: &str) -> Result<Vec<String>> {
        match self.value(name)? {
            FieldValue::List(items) => Ok(items),
            FieldValue::Text(_) => Err(Error::ControlType {
                name: name.to_string(),
                expected: "list",
            }),
        }
    }

    /// Write a field, dispatching on the value shape
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> Result<()> {
        match value {
            FieldValue::Text(text) => self.set_text(name, text),
            FieldValue::List(items) => self.select(name, &items),
        }
    }

    /// Write a scalar field
    pub fn set_text(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let control = self
            .controls
            .iter_mut()
            .find(|c| c.has_name(name))
            .ok_or_else(|| Error::ControlNotFound(name.to_string()))?;

        if !control.kind.is_scalar() {
            return Err(Error::ControlType {
                name: name.to_string(),
                expected: "text",
            });
        }
        if control.is_locked() {
            return Err(Error::ReadOnlyControl(name.to_string()));
        }

        control.value = value.into();
        Ok(())
    }

    /// Replace the selection of a list field
    ///
    /// Every value must be offered by the control. An empty slice clears the
    /// selection, which unchecks a checkbox.
    pub fn select<S: AsRef<str>>(&mut self, name: &str, values: &[S]) -> Result<()> {
        let kind = self.first_list(name)?.kind;
        let wanted: Vec<&str> = values.iter().map(AsRef::as_ref).collect();

        match kind {
            ControlKind::Select { multiple } => {
                let control = self
                    .controls
                    .iter_mut()
                    .find(|c| c.has_name(name) && c.kind == kind)
                    .ok_or_else(|| Error::ControlNotFound(name.to_string()))?;
                if control.is_locked() {
                    return Err(Error::ReadOnlyControl(name.to_string()));
                }
                if !multiple && wanted.len() > 1 {
                    return Err(Error::SingleValue(name.to_string()));
                }
                for value in &wanted {
                    if !control.options.iter().any(|o| !o.disabled && o.value == *value) {
                        return Err(Error::OptionNotFound {
                            control: name.to_string(),
                            value: value.to_string(),
                        });
                    }
                }
                for option in &mut control.options {
                    option.selected = wanted.contains(&option.value.as_str());
                }
                Ok(())
            }
            ControlKind::Checkbox | ControlKind::Radio => {
                if kind == ControlKind::Radio && wanted.len() > 1 {
                    return Err(Error::SingleValue(name.to_string()));
                }
                let group: Vec<&mut Control> = self
                    .controls
                    .iter_mut()
                    .filter(|c| c.has_name(name) && c.kind.is_list())
                    .collect();
                for value in &wanted {
                    if !group.iter().any(|c| c.value == *value) {
                        return Err(Error::OptionNotFound {
                            control: name.to_string(),
                            value: value.to_string(),
                        });
                    }
                }
                if group.iter().any(|c| c.is_locked()) {
                    return Err(Error::ReadOnlyControl(name.to_string()));
                }
                for control in group {
                    control.checked = wanted.contains(&control.value.as_str());
                }
                Ok(())
            }
            _ => Err(Error::ControlType {
                name: name.to_string(),
                expected: "list",
            }),
        }
    }

    /// Lift or restore the read-only flag of every control with this name
    pub fn set_readonly(&mut self, name: &str, readonly: bool) -> Result<()> {
        let mut found = false;
        for control in self.controls.iter_mut().filter(|c| c.has_name(name)) {
            control.readonly = readonly;
            found = true;
        }
        if !found {
            return Err(Error::ControlNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Build the request that clicking `button` would send
    ///
    /// With no button name the first submit control is clicked. Only the
    /// clicked button contributes its name and value.
    pub fn submission(&self, button: Option<&str>) -> Result<Submission> {
        let clicked = match button {
            Some(name) => Some(
                self.controls
                    .iter()
                    .position(|c| c.kind.is_submit() && !c.disabled && c.has_name(name))
                    .ok_or_else(|| Error::ControlNotFound(name.to_string()))?,
            ),
            None => self
                .controls
                .iter()
                .position(|c| c.kind.is_submit() && !c.disabled),
        };

        let mut pairs = Vec::new();
        for (idx, control) in self.controls.iter().enumerate() {
            if control.disabled {
                continue;
            }
            let Some(name) = control.name.as_ref() else {
                continue;
            };

            match control.kind {
                ControlKind::Text
                | ControlKind::Password
                | ControlKind::Hidden
                | ControlKind::TextArea => pairs.push((name.clone(), control.value.clone())),
                ControlKind::Select { .. } => {
                    for option in control.selected_options().filter(|o| !o.disabled) {
                        pairs.push((name.clone(), option.value.clone()));
                    }
                }
                ControlKind::Checkbox | ControlKind::Radio => {
                    if control.checked {
                        pairs.push((name.clone(), control.value.clone()));
                    }
                }
                ControlKind::Submit => {
                    if clicked == Some(idx) {
                        pairs.push((name.clone(), control.value.clone()));
                    }
                }
                ControlKind::Image => {
                    if clicked == Some(idx) {
                        pairs.push((format!("{}.x", name), "1".to_string()));
                        pairs.push((format!("{}.y", name), "1".to_string()));
                    }
                }
                ControlKind::Button | ControlKind::File => {}
            }
        }

        Ok(Submission {
            method: self.method.clone(),
            url: self.action.clone(),
            pairs,
            referer: self.source.clone(),
        })
    }
}
