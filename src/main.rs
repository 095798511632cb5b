#![allow(non_snake_case)]

use dioxus::prelude::*;
use jse_clipboard::components::ClipboardButton;

const SAMPLE_SCHEMA: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "type": "object",
  "properties": {
    "name": { "type": "string" },
    "tags": { "type": "array", "items": { "type": "string" } }
  },
  "required": ["name"]
}"#;

const STYLE: &str = r#"
.jse-copy-button { padding: 0.25rem 0.75rem; border: 1px dashed #888; cursor: pointer; }
.jse-copy-button.jse-copied { border-color: #16a34a; color: #16a34a; }
"#;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting jse-clipboard demo");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        style { "{STYLE}" }
        div {
            class: "jse-demo",
            pre { "{SAMPLE_SCHEMA}" }
            ClipboardButton {
                content: SAMPLE_SCHEMA,
                label: "Copy schema",
            }
            ClipboardButton {
                content: "",
                label: "Nothing to copy",
                class: "jse-copy-empty",
            }
        }
    }
}
