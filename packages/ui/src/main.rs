use actions_menu_ui::{config::PageConfig, demo::demo_page, on_page_load, CopyToOutput};
use gloo_console::error;
use silkenweb::mount;

const ACTIONS: [&str; 4] = ["Action 1", "Action 2", "Action 3", "Action 4"];

fn main() {
    let config = PageConfig::default();
    let copy_to_output = CopyToOutput::new(config.output_id.as_str());

    mount("app", demo_page(&config, &ACTIONS));

    if let Err(e) = on_page_load(config, copy_to_output) {
        error!(format!("Couldn't set up menu buttons: {e}"));
    }
}
