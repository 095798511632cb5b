//! Copy-to-clipboard hook for the JSON schema editor
//!
//! Clicking a bound element copies its `data-content` attribute to the
//! clipboard, adds the `jse-copied` class and shows "Copied!" in the nested
//! label for two seconds.

#![allow(non_snake_case)]

pub mod behavior;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;

pub use behavior::{ClipboardWriter, CopyBehavior, CopyOutcome, CopyTarget, LabelNode, RevertScheduler};
pub use config::{CopyOptions, COPIED_CLASS, COPIED_TEXT, CONTENT_ATTRIBUTE, LABEL_SELECTOR, REVERT_DELAY_MS};
pub use error::CopyError;
