use super::control::{Control, ControlKind, SelectOption};
use super::HtmlForm;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use url::Url;

lazy_static! {
    static ref FORM: Selector = Selector::parse("form").unwrap();
    static ref CONTROLS: Selector = Selector::parse("input, select, textarea, button").unwrap();
    static ref OPTIONS: Selector = Selector::parse("option").unwrap();
}

const DEFAULT_ENCTYPE: &str = "application/x-www-form-urlencoded";

impl HtmlForm {
    /// Parse every `<form>` of an HTML document, in document order
    ///
    /// Relative actions are resolved against `page_url`; a missing or empty
    /// action targets the page itself.
    pub fn parse_all(html: &str, page_url: &Url) -> Vec<HtmlForm> {
        let document = Html::parse_document(html);
        let forms: Vec<HtmlForm> = document
            .select(&FORM)
            .map(|element| parse_form(element, page_url))
            .collect();

        tracing::debug!("Parsed {} form(s) from {}", forms.len(), page_url);
        forms
    }
}

fn parse_form(element: ElementRef<'_>, page_url: &Url) -> HtmlForm {
    let attrs = element.value();

    let action = match attrs.attr("action").map(str::trim) {
        Some(action) if !action.is_empty() => page_url.join(action).unwrap_or_else(|e| {
            tracing::debug!("Unresolvable form action {:?}: {}", action, e);
            page_url.clone()
        }),
        _ => page_url.clone(),
    };

    let method = attrs
        .attr("method")
        .map(|m| m.trim().to_ascii_uppercase())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "GET".to_string());

    let enctype = attrs
        .attr("enctype")
        .map(|e| e.trim().to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_ENCTYPE.to_string());

    let controls = element.select(&CONTROLS).filter_map(parse_control).collect();

    HtmlForm {
        name: attrs.attr("name").map(str::to_string),
        id: attrs.attr("id").map(str::to_string),
        action,
        method,
        enctype,
        source: page_url.clone(),
        controls,
    }
}

fn parse_control(element: ElementRef<'_>) -> Option<Control> {
    let attrs = element.value();
    let name = attrs
        .attr("name")
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    let mut control = match attrs.name() {
        "input" => {
            let input_type = attrs.attr("type").unwrap_or("text").trim().to_ascii_lowercase();
            let kind = match input_type.as_str() {
                "password" => ControlKind::Password,
                "hidden" => ControlKind::Hidden,
                "checkbox" => ControlKind::Checkbox,
                "radio" => ControlKind::Radio,
                "submit" => ControlKind::Submit,
                "image" => ControlKind::Image,
                "button" | "reset" => ControlKind::Button,
                "file" => ControlKind::File,
                _ => ControlKind::Text,
            };
            let default_value = if matches!(kind, ControlKind::Checkbox | ControlKind::Radio) {
                "on"
            } else {
                ""
            };
            let mut control = Control::new(name, kind, attrs.attr("value").unwrap_or(default_value));
            control.checked = attrs.attr("checked").is_some();
            control
        }
        "textarea" => {
            let text: String = element.text().collect();
            Control::new(name, ControlKind::TextArea, text)
        }
        "select" => {
            let multiple = attrs.attr("multiple").is_some();
            let mut control = Control::new(name, ControlKind::Select { multiple }, "");
            control.options = parse_options(element, multiple);
            control
        }
        "button" => {
            let kind = match attrs.attr("type").map(|t| t.trim().to_ascii_lowercase()) {
                None => ControlKind::Submit,
                Some(t) if t == "submit" => ControlKind::Submit,
                Some(_) => ControlKind::Button,
            };
            Control::new(name, kind, attrs.attr("value").unwrap_or(""))
        }
        _ => return None,
    };

    control.readonly = attrs.attr("readonly").is_some();
    control.disabled = attrs.attr("disabled").is_some();
    Some(control)
}

fn parse_options(select: ElementRef<'_>, multiple: bool) -> Vec<SelectOption> {
    let mut options: Vec<SelectOption> = select
        .select(&OPTIONS)
        .map(|option| {
            let attrs = option.value();
            let label = option.text().collect::<Vec<_>>().join(" ");
            let label = label.split_whitespace().collect::<Vec<_>>().join(" ");
            SelectOption {
                value: attrs.attr("value").map(str::to_string).unwrap_or_else(|| label.clone()),
                label,
                selected: attrs.attr("selected").is_some(),
                disabled: attrs.attr("disabled").is_some(),
            }
        })
        .collect();

    if !multiple {
        // A single select always shows exactly one option: the last one
        // marked selected, or else the first enabled one.
        match options.iter().rposition(|o| o.selected) {
            Some(last) => {
                for (idx, option) in options.iter_mut().enumerate() {
                    option.selected = idx == last;
                }
            }
            None => {
                if let Some(first) = options.iter_mut().find(|o| !o.disabled) {
                    first.selected = true;
                }
            }
        }
    }

    options
}
