use clockface::Picker;
use clockpick::config;
use clockpick::gui::app::AppModel;
use clockpick::sys::runtime;
use relm4::prelude::*;

fn main() {
    env_logger::init();

    let config = config::load_or_setup();
    let picker = Picker::new(config.picker.clone());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.clockpick.picker");

    app.run::<AppModel>((picker, config, rx));
}
