use super::types::sidebar_error::{InputField, SidebarError};
use crate::types::marker::Marker;

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Markers whose title contains `text`, ignoring case. Order is preserved.
pub fn filter(markers: &[Marker], text: &str) -> Result<Vec<Marker>, SidebarError> {
    if is_blank(text) {
        return Err(SidebarError::Validation(InputField::Filter));
    }

    let needle = text.to_lowercase();

    Ok(markers
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect())
}

/// Exact, case-sensitive lookup by title.
pub fn select_by_title<'a>(markers: &'a [Marker], title: &str) -> Result<&'a Marker, SidebarError> {
    markers
        .iter()
        .find(|m| m.title == title)
        .ok_or_else(|| SidebarError::NotFound {
            title: title.to_string(),
        })
}
