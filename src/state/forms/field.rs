//! Form field value objects

/// Value held by a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Ordered selection for multi-select fields
    List(Vec<String>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Text value, or empty for list fields
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::List(_) => "",
        }
    }

    /// List value, or empty for text fields
    pub fn as_list(&self) -> &[String] {
        match self {
            FieldValue::List(items) => items,
            FieldValue::Text(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
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

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// One choice of a select field: wire value plus display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl SelectOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Select(&'static [SelectOption]),
    MultiSelect(&'static [SelectOption]),
}

/// Static description of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            placeholder,
        }
    }

    pub const fn multiline(
        name: &'static str,
        label: &'static str,
        placeholder: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Multiline,
            placeholder,
        }
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Select(options),
            placeholder: "Select...",
        }
    }

    pub const fn multi_select(
        name: &'static str,
        label: &'static str,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::MultiSelect(options),
            placeholder: "",
        }
    }

    /// Value a fresh form holds for this field
    pub fn empty_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::MultiSelect(_) => FieldValue::List(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select(options) | FieldKind::MultiSelect(options) => options,
            FieldKind::Text | FieldKind::Multiline => &[],
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Multiline)
    }

    /// Display label for a stored value; falls back to the raw value
    pub fn option_label<'a>(&self, value: &'a str) -> &'a str {
        self.options()
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label)
            .unwrap_or(value)
    }
}
