use crate::app::App;
use log::LevelFilter;

mod app;
mod components;
mod config;
mod grid;
mod logger;
mod storage;

fn main() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::init(level);
    yew::Renderer::<App>::new().render();
}
