mod app;
mod error;
mod event;
mod screen;
mod views;
mod widgets;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;

fn main() {
    let log_file = File::create("regform-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let result = App::new().and_then(|mut app| app.run());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
}
