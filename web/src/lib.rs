use clap::Parser;
use wasm_bindgen::prelude::*;

pub use board::{BoardGrid, BoardProps, BoardView, GridProps};

mod api;
mod board;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    board: BoardProps,
}

/// Arguments are read from the location hash, e.g. `#-vv&--seed=42&--sequential`.
fn parse_hash(hash: &str) -> Result<Args, clap::Error> {
    Args::try_parse_from(hash.split(['#', '&']))
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{body, document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match parse_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (parse_hash("").expect("empty hash must parse"), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("board options: {:?}", args.board);

    let root = document()
        .get_element_by_id("board")
        .unwrap_or_else(|| body().into());

    log::debug!("App started");
    yew::Renderer::<BoardView>::with_root_and_props(root, args.board).render();
}
