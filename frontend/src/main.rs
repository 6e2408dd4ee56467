use crate::app::App;

mod app;
mod components;
mod config;
mod tops_sheet;
mod workspace_grid;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Aurora Hub starting");
    yew::Renderer::<App>::new().render();
}
