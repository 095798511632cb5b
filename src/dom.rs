//! Browser bindings for the copy behavior
//!
//! Implements the behavior seams on top of web-sys and owns the click
//! listener registered on the bound element.
//!
//! Host frameworks that render the label (Dioxus keeps a handle to the text
//! node under the span) stay in sync because a lone text child is rewritten
//! in place instead of being replaced.

/// How the label's text gets replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextWrite {
    /// Update the existing text node's value
    InPlace,
    /// Replace all children with a fresh text node
    Replace,
}

pub fn text_write_for(first_child_is_text: bool, has_siblings: bool) -> TextWrite {
    if first_child_is_text && !has_siblings {
        TextWrite::InPlace
    } else {
        TextWrite::Replace
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

#[cfg(target_arch = "wasm32")]
mod web {
    use futures::future::LocalBoxFuture;
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Element, HtmlElement};

    use crate::behavior::{ClipboardWriter, CopyBehavior, CopyTarget, LabelNode, RevertScheduler};
    use crate::config::CopyOptions;
    use crate::error::CopyError;

    use super::{text_write_for, TextWrite};

    pub type DomBehavior = CopyBehavior<DomTarget, NavigatorClipboard, TimeoutScheduler>;

    /// Best-effort message out of a rejected promise or thrown value
    pub fn js_message(value: &JsValue) -> String {
        if let Some(msg) = value.as_string() {
            return msg;
        }
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return String::from(err.message());
        }
        format!("{:?}", value)
    }

    #[derive(Clone)]
    pub struct DomTarget(Element);

    impl DomTarget {
        pub fn new(element: Element) -> Self {
            Self(element)
        }

        pub fn element(&self) -> &Element {
            &self.0
        }
    }

    pub struct DomLabel(HtmlElement);

    impl LabelNode for DomLabel {
        fn text(&self) -> String {
            self.0.inner_text()
        }

        fn set_text(&self, text: &str) {
            let first = self.0.first_child();
            let first_is_text = first
                .as_ref()
                .map(|node| node.node_type() == web_sys::Node::TEXT_NODE)
                .unwrap_or(false);
            let has_siblings = first
                .as_ref()
                .map(|node| node.next_sibling().is_some())
                .unwrap_or(false);

            match (text_write_for(first_is_text, has_siblings), first) {
                (TextWrite::InPlace, Some(node)) => node.set_node_value(Some(text)),
                _ => self.0.set_inner_text(text),
            }
        }
    }

    impl CopyTarget for DomTarget {
        type Label = DomLabel;

        fn attribute(&self, name: &str) -> Option<String> {
            self.0.get_attribute(name)
        }

        fn add_class(&self, class: &str) {
            if let Err(e) = self.0.class_list().add_1(class) {
                log::warn!("Failed to add class {}: {}", class, js_message(&e));
            }
        }

        fn remove_class(&self, class: &str) {
            if let Err(e) = self.0.class_list().remove_1(class) {
                log::warn!("Failed to remove class {}: {}", class, js_message(&e));
            }
        }

        fn find_label(&self, selector: &str) -> Option<DomLabel> {
            match self.0.query_selector(selector) {
                Ok(found) => found
                    .and_then(|node| node.dyn_into::<HtmlElement>().ok())
                    .map(DomLabel),
                Err(e) => {
                    log::warn!("Invalid label selector '{}': {}", selector, js_message(&e));
                    None
                }
            }
        }
    }

    /// `navigator.clipboard.writeText`
    pub struct NavigatorClipboard;

    impl NavigatorClipboard {
        fn clipboard() -> Result<web_sys::Clipboard, CopyError> {
            let window = web_sys::window().ok_or(CopyError::ClipboardUnavailable)?;
            let navigator = window.navigator();

            // Undefined outside secure contexts
            let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .map_err(|_| CopyError::ClipboardUnavailable)?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return Err(CopyError::ClipboardUnavailable);
            }

            Ok(clipboard.unchecked_into())
        }
    }

    impl ClipboardWriter for NavigatorClipboard {
        fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), CopyError>> {
            let promise = Self::clipboard().map(|clipboard| clipboard.write_text(text));

            Box::pin(async move {
                let promise = promise?;
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| CopyError::ClipboardWrite(js_message(&e)))
            })
        }
    }

    /// `setTimeout` through gloo; dropping the [`Timeout`] clears it
    pub struct TimeoutScheduler;

    impl RevertScheduler for TimeoutScheduler {
        type Handle = Timeout;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
            Timeout::new(delay_ms, callback)
        }
    }

    /// A copy behavior attached to an element's `click` event.
    ///
    /// Dropping the binding removes the listener and tears the behavior down.
    pub struct CopyBinding {
        behavior: DomBehavior,
        listener: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl CopyBinding {
        pub fn attach(element: Element, options: CopyOptions) -> Result<Self, CopyError> {
            let behavior = CopyBehavior::new(
                DomTarget::new(element.clone()),
                NavigatorClipboard,
                TimeoutScheduler,
                options,
            );

            let on_click = behavior.clone();
            let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                let click = on_click.click();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = click.await;
                    log::debug!("Copy click finished: {:?}", outcome);
                });
            }) as Box<dyn FnMut(web_sys::Event)>);

            element
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                .map_err(|e| CopyError::Listener(js_message(&e)))?;

            log::debug!("Copy behavior attached");
            Ok(Self { behavior, listener })
        }

        pub fn element(&self) -> &Element {
            self.behavior.target().element()
        }

        pub fn behavior(&self) -> &DomBehavior {
            &self.behavior
        }

        pub fn teardown(self) {
            drop(self);
        }
    }

    impl Drop for CopyBinding {
        fn drop(&mut self) {
            if let Err(e) = self
                .element()
                .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref())
            {
                log::warn!("Failed to detach click listener: {}", js_message(&e));
            }
            self.behavior.teardown();
            log::debug!("Copy behavior detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lone_text_child_is_updated_in_place() {
        assert_eq!(text_write_for(true, false), TextWrite::InPlace);
    }

    #[test]
    fn test_mixed_or_empty_label_is_replaced() {
        assert_eq!(text_write_for(true, true), TextWrite::Replace);
        assert_eq!(text_write_for(false, false), TextWrite::Replace);
        assert_eq!(text_write_for(false, true), TextWrite::Replace);
    }
}
