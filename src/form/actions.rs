#[derive(Debug, Clone)]
pub enum FormCommand {
    FocusNextField,
    FocusPrevField,
    FieldStep(i32),
    ClearForm,
}
