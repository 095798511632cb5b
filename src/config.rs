//! Contract values shared with the host page
//!
//! The attribute name and revert delay are fixed. The label selector,
//! confirmation text and marker class can be overridden per hook through
//! [`CopyOptions`], which hosts pass in as a plain JS object.

use serde::Deserialize;

/// Attribute on the bound element holding the exact text to copy
pub const CONTENT_ATTRIBUTE: &str = "data-content";

/// Marker class toggled while the confirmation is showing.
/// The host stylesheet is expected to define it.
pub const COPIED_CLASS: &str = "jse-copied";

/// Label text shown while the confirmation is showing
pub const COPIED_TEXT: &str = "Copied!";

/// Selector for the descendant whose text is swapped
pub const LABEL_SELECTOR: &str = "span";

/// Delay before the label and marker class are reverted
pub const REVERT_DELAY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyOptions {
    pub label_selector: String,
    pub copied_text: String,
    pub marker_class: String,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            label_selector: LABEL_SELECTOR.to_string(),
            copied_text: COPIED_TEXT.to_string(),
            marker_class: COPIED_CLASS.to_string(),
        }
    }
}
