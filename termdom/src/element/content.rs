#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line editable text field.
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
        focused: bool,
    },
}
