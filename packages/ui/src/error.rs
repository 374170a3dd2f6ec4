use thiserror::Error;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No global `window`")]
    NoWindow,
    #[error("Window has no `document`")]
    NoDocument,
    #[error("No element matches `{selector}`")]
    MissingElement { selector: String },
    #[error("Element matching `{selector}` is not an HTML element")]
    NotHtmlElement { selector: String },
    #[error("Invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("{operation} failed: {message}")]
    Dom {
        operation: &'static str,
        message: String,
    },
}

impl Error {
    pub(crate) fn dom(operation: &'static str, err: JsValue) -> Self {
        Self::Dom {
            operation,
            message: js_message(&err),
        }
    }

    pub(crate) fn invalid_selector(selector: &str, err: JsValue) -> Self {
        Self::InvalidSelector {
            selector: selector.to_owned(),
            message: js_message(&err),
        }
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
