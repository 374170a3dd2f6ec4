use actions_menu_controller::MenuActions;
use gloo_console::error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};

/// Copies the chosen item's text into an `<input>`.
#[derive(Clone, Debug)]
pub struct CopyToOutput {
    output_id: String,
}

impl CopyToOutput {
    pub fn new(output_id: impl Into<String>) -> Self {
        Self {
            output_id: output_id.into(),
        }
    }

    fn output(&self) -> Option<HtmlInputElement> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.output_id)?
            .dyn_into()
            .ok()
    }
}

impl MenuActions<HtmlElement> for CopyToOutput {
    fn perform_menu_action(&self, item: &HtmlElement) {
        let text = item.text_content().unwrap_or_default();

        match self.output() {
            Some(output) => output.set_value(text.trim()),
            None => error!(format!("No input with id `{}`", self.output_id)),
        }
    }
}
