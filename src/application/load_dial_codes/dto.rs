use std::sync::Arc;

use crate::domain::catalog::entity::DialCodeCatalog;
use crate::domain::phone::value_objects::DialCode;

#[derive(Debug, Clone)]
pub struct LoadDialCodesRequest {
    /// Dial code selected before the reload, if any.
    pub current_selection: Option<DialCode>,
}

#[derive(Debug, Clone)]
pub struct DialCodesLoaded {
    pub catalog: Arc<DialCodeCatalog>,
    /// The selection after the reload: kept if still present, otherwise the
    /// first option.
    pub selected: DialCode,
}
