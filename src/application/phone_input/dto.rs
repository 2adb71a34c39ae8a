use crate::domain::phone::value_objects::DialCode;

#[derive(Debug, Clone)]
pub struct PhoneInputRequest {
    /// The field's raw content as typed, including any formatting characters.
    pub raw: String,
    /// Dial code currently selected in the picker.
    pub fallback_dial_code: DialCode,
    /// Whether a dial code typed into the field may override the selection.
    pub detect_dial_code: bool,
}

/// Derived state recomputed on every change and discarded with the form.
#[derive(Debug, Clone)]
pub struct PhoneInputState {
    pub dial_code: DialCode,
    pub local_digits: String,
    /// Grouped national digits shown inside the field.
    pub display: String,
    /// The stored form "<dial code> <display>", empty until digits exist.
    pub value: String,
    pub is_valid: bool,
}
