use silkenweb::{
    elements::{
        html::{button, div, input, label, li, ul, Div, Li},
        AriaElement,
    },
    prelude::{Element, ParentElement},
};

use crate::config::{PageConfig, MARKER_CLASS};

const BUTTON_ID: &str = "menubutton1";
const MENU_ID: &str = "menu1";

/// A page with one actions menu button and the field its selections are
/// copied into.
pub fn demo_page(config: &PageConfig, actions: &[&str]) -> Div {
    div()
        .child(
            div()
                .class(MARKER_CLASS)
                .child(
                    button()
                        .r#type("button")
                        .id(BUTTON_ID)
                        .attribute("aria-haspopup", "true")
                        .attribute("aria-controls", MENU_ID)
                        .aria_expanded("false")
                        .text("Actions"),
                )
                .child(
                    ul().id(MENU_ID)
                        .role("menu")
                        .aria_labelledby(BUTTON_ID)
                        .attribute("style", "display: none")
                        .children(actions.iter().copied().map(menu_item)),
                ),
        )
        .child(
            div()
                .child(
                    label()
                        .attribute("for", config.output_id.as_str())
                        .text("Last action: "),
                )
                .child(
                    input()
                        .id(config.output_id.as_str())
                        .r#type("text")
                        .attribute("readonly", true),
                ),
        )
}

fn menu_item(name: &str) -> Li {
    li().role("menuitem").text(name)
}
