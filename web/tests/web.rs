//! Browser tests, run with `wasm-pack test --headless --firefox web`.
#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use jeopardy_core as game;
use jeopardy_web::{BoardGrid, GridProps};
use wasm_bindgen_test::*;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

const TITLES: [&str; game::CATEGORY_COUNT] = ["Math", "Lit", "Science", "History", "Art", "Music"];

fn board() -> game::Board {
    let categories = TITLES
        .iter()
        .map(|title| {
            let clues = (0..game::CLUES_PER_CATEGORY)
                .map(|i| game::Clue::new(format!("{title} {i}"), format!("answer {i}")))
                .collect();
            game::Category::new(*title, clues)
        })
        .collect();
    game::Board::from_categories(categories).unwrap()
}

async fn render(surface: game::BoardSurface) -> String {
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();

    let props = GridProps {
        surface,
        generation: 1,
        onactivate: Callback::noop(),
    };
    yew::Renderer::<BoardGrid>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(Duration::ZERO).await;

    root.inner_html()
}

#[wasm_bindgen_test]
async fn grid_shows_titles_and_placeholders() {
    let mut surface = game::BoardSurface::default();
    surface.paint(&board());

    let html = render(surface).await;

    let headers: Vec<String> = TITLES.iter().map(|title| format!("<th>{title}</th>")).collect();
    assert!(html.contains(&headers.concat()), "{html}");
    assert_eq!(html.matches("<td").count(), 30);
    assert_eq!(html.matches(">?</td>").count(), 30);
}

#[wasm_bindgen_test]
async fn revealed_cell_is_drawn_with_its_text() {
    let mut surface = game::BoardSurface::default();
    surface.paint(&board());
    surface.update_cell((2, 1), &game::RevealOutcome::ShowQuestion("2+2".into()));

    let html = render(surface).await;

    assert!(html.contains(r#"<td class="cell shown">2+2</td>"#), "{html}");
    assert_eq!(html.matches(">?</td>").count(), 29);
}
