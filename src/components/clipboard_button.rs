use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

/// Button that copies `content` to the clipboard and shows "Copied!" in
/// place of `label` for two seconds.
///
/// The click handling lives in the clipboard hook, which is mounted on the
/// rendered button and released when the component unmounts. The hook
/// writes into the span's text node in place, so a new `label` still shows
/// up after the confirmation; one arriving while "Copied!" is showing is
/// overwritten by the revert.
#[component]
pub fn ClipboardButton(
    /// Text written to the clipboard
    #[props(into)]
    content: String,
    /// Label shown when idle
    #[props(into)]
    label: String,
    /// Extra classes for the button
    #[props(into, default)]
    class: String,
) -> Element {
    #[cfg(target_arch = "wasm32")]
    let hook = use_hook(|| Rc::new(RefCell::new(crate::hooks::JsonSchemaEditorClipboard::new())));

    #[cfg(target_arch = "wasm32")]
    {
        let hook = hook.clone();
        use_drop(move || {
            hook.borrow_mut().unmount();
        });
    }

    rsx! {
        button {
            r#type: "button",
            class: "jse-copy-button {class}",
            "data-content": "{content}",
            onmounted: move |evt| {
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(element) = evt.data.downcast::<web_sys::Element>() {
                        if let Err(e) = hook.borrow_mut().mount(element.clone()) {
                            log::error!("Failed to mount clipboard hook: {}", e);
                        }
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = evt;
            },
            span { "{label}" }
        }
    }
}
