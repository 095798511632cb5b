//! Host-framework hooks
//!
//! The host page registers hooks by name and calls `mounted` when the bound
//! element is inserted and `destroyed` when it is removed. From JS:
//!
//! ```js
//! import { JSONSchemaEditorClipboard } from "./pkg/jse_clipboard.js";
//!
//! const hook = new JSONSchemaEditorClipboard();
//! hook.mounted(el);
//! // later
//! hook.destroyed();
//! ```

/// Name the clipboard hook is registered under
pub const CLIPBOARD_HOOK: &str = "JSONSchemaEditorClipboard";

/// Every hook this crate provides
pub const HOOK_NAMES: &[&str] = &[CLIPBOARD_HOOK];

/// What mounting an element does given the element already bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountAction {
    /// Same element, keep the existing binding
    Keep,
    /// Nothing bound yet
    Bind,
    /// A different element is bound; release it first
    Rebind,
}

pub fn mount_action<E: PartialEq>(bound: Option<&E>, element: &E) -> MountAction {
    match bound {
        Some(current) if current == element => MountAction::Keep,
        Some(_) => MountAction::Rebind,
        None => MountAction::Bind,
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{hook_names, JsonSchemaEditorClipboard};

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use super::{mount_action, MountAction, HOOK_NAMES};
    use crate::config::CopyOptions;
    use crate::dom::CopyBinding;
    use crate::error::CopyError;

    /// Clipboard hook for one bound element
    #[wasm_bindgen(js_name = JSONSchemaEditorClipboard)]
    #[derive(Default)]
    pub struct JsonSchemaEditorClipboard {
        options: CopyOptions,
        binding: Option<CopyBinding>,
    }

    #[wasm_bindgen(js_class = JSONSchemaEditorClipboard)]
    impl JsonSchemaEditorClipboard {
        #[wasm_bindgen(constructor)]
        pub fn new() -> Self {
            Self::default()
        }

        /// Hook with overrides, e.g. `{ copiedText: "Done" }`
        #[wasm_bindgen(js_name = withOptions)]
        pub fn with_options(options: JsValue) -> Result<JsonSchemaEditorClipboard, JsValue> {
            let options: CopyOptions = serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid clipboard options: {}", e)))?;
            Ok(Self::from_options(options))
        }

        pub fn mounted(&mut self, el: Element) -> Result<(), JsValue> {
            self.mount(el).map_err(|e| JsValue::from_str(&e.to_string()))
        }

        pub fn destroyed(&mut self) {
            self.unmount();
        }

        #[wasm_bindgen(getter, js_name = isCopied)]
        pub fn is_copied(&self) -> bool {
            self.binding
                .as_ref()
                .map(|binding| binding.behavior().is_copied())
                .unwrap_or(false)
        }
    }

    impl JsonSchemaEditorClipboard {
        pub fn from_options(options: CopyOptions) -> Self {
            Self {
                options,
                binding: None,
            }
        }

        /// Attach to `element`. Mounting the element that is already bound
        /// is a no-op; mounting a different one releases the old binding.
        pub fn mount(&mut self, element: Element) -> Result<(), CopyError> {
            match mount_action(self.binding.as_ref().map(CopyBinding::element), &element) {
                MountAction::Keep => {
                    log::debug!("Clipboard hook already mounted on this element");
                    return Ok(());
                }
                MountAction::Rebind => self.unmount(),
                MountAction::Bind => {}
            }

            self.binding = Some(CopyBinding::attach(element, self.options.clone())?);
            Ok(())
        }

        pub fn unmount(&mut self) {
            if let Some(binding) = self.binding.take() {
                binding.teardown();
            }
        }
    }

    /// Names of the hooks exported by this module, for host registration
    #[wasm_bindgen(js_name = hookNames)]
    pub fn hook_names() -> js_sys::Array {
        HOOK_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
    }
}
