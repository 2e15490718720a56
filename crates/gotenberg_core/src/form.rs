use std::collections::BTreeMap;

use crate::Asset;

/// Multipart field name the service expects for every uploaded file.
pub const FILES_FIELD: &str = "files";

/// One multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, asset: Asset },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Inert, ordered description of a `multipart/form-data` body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    parts: Vec<FormPart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn push_file(&mut self, name: impl Into<String>, asset: Asset) {
        self.parts.push(FormPart::File {
            name: name.into(),
            asset,
        });
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Value of the first text field called `name`.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// All text fields in payload order.
    pub fn text_fields(&self) -> Vec<(&str, &str)> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                FormPart::Text { name, value } => Some((name.as_str(), value.as_str())),
                FormPart::File { .. } => None,
            })
            .collect()
    }

    /// All file attachments in payload order.
    pub fn files(&self) -> Vec<&Asset> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                FormPart::File { asset, .. } => Some(asset),
                FormPart::Text { .. } => None,
            })
            .collect()
    }
}

/// Canonical string form of an option value as sent to the service.
pub trait FormValue {
    fn to_form_value(&self) -> String;
}

impl FormValue for bool {
    fn to_form_value(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl FormValue for f64 {
    fn to_form_value(&self) -> String {
        self.to_string()
    }
}

impl FormValue for u32 {
    fn to_form_value(&self) -> String {
        self.to_string()
    }
}

impl FormValue for String {
    fn to_form_value(&self) -> String {
        self.clone()
    }
}

impl FormValue for &str {
    fn to_form_value(&self) -> String {
        (*self).to_string()
    }
}

/// A set of options that encodes into multipart text fields.
///
/// Implementors call `emit` once per present option and never for an
/// absent one.
pub trait FormOptions {
    fn visit_fields(&self, emit: &mut dyn FnMut(&str, String));
}

/// Emits `name` only when `value` is present.
pub fn emit_field<V: FormValue>(
    emit: &mut dyn FnMut(&str, String),
    name: &str,
    value: &Option<V>,
) {
    if let Some(value) = value {
        emit(name, value.to_form_value());
    }
}

/// Untyped scalar option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FormValue for OptionValue {
    fn to_form_value(&self) -> String {
        match self {
            OptionValue::Bool(value) => value.to_form_value(),
            OptionValue::Number(value) => value.to_form_value(),
            OptionValue::Text(value) => value.clone(),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// Options keyed by their wire name, for fields the typed option structs
/// do not cover. A key mapped to `None` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawOptions {
    entries: BTreeMap<String, Option<OptionValue>>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.entries.insert(name.into(), Some(value.into()));
        self
    }

    pub fn unset(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }
}

impl FormOptions for RawOptions {
    fn visit_fields(&self, emit: &mut dyn FnMut(&str, String)) {
        for (name, value) in &self.entries {
            emit_field(emit, name, value);
        }
    }
}

/// Appends one text field per present option.
pub fn encode_options(payload: &mut FormPayload, options: &dyn FormOptions) {
    options.visit_fields(&mut |name: &str, value: String| payload.push_text(name, value));
}

/// Appends each asset as a `files` field, preserving order.
pub fn encode_files<I>(payload: &mut FormPayload, files: I)
where
    I: IntoIterator<Item = Asset>,
{
    for asset in files {
        payload.push_file(FILES_FIELD, asset);
    }
}
