use crate::api::{DEFAULT_API_URL, HttpTriviaSource};
use crate::utils::js_random_seed;
use clap::Args;
use jeopardy_core as game;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use yew::prelude::*;

pub enum Msg {
    Start,
    Loaded(game::LoadTicket, game::Result<game::Board>),
    Activate(game::CellActivation),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    x: game::Coord,
    y: game::Coord,
    generation: u64,
    text: AttrValue,
    callback: Callback<game::CellActivation>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        x,
        y,
        generation,
        text,
        callback,
    } = props.clone();

    let class = classes!(
        "cell",
        (text.as_str() != game::BoardSurface::PLACEHOLDER).then_some("shown")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", x, y);
        callback.emit(game::CellActivation {
            generation,
            coords: (x, y),
        });
    });

    html! {
        <td {class} {onclick}>{text.to_string()}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct GridProps {
    pub surface: game::BoardSurface,
    pub generation: u64,
    pub onactivate: Callback<game::CellActivation>,
}

/// Draws the board surface as a table: category titles in the head, one row per clue index.
#[function_component(BoardGrid)]
pub fn board_grid(props: &GridProps) -> Html {
    let GridProps {
        surface,
        generation,
        onactivate,
    } = props;

    html! {
        <table class="board">
            <thead>
                <tr>
                    { for surface.headers().iter().map(|title| html! { <th>{title.clone()}</th> }) }
                </tr>
            </thead>
            <tbody>
                {
                    for surface.rows().iter().enumerate().map(|(y, row)| html! {
                        <tr>
                            {
                                for row.iter().enumerate().map(|(x, text)| html! {
                                    <CellView
                                        x={x as game::Coord}
                                        y={y as game::Coord}
                                        generation={*generation}
                                        text={AttrValue::from(text.clone())}
                                        callback={onactivate.clone()}
                                    />
                                })
                            }
                        </tr>
                    })
                }
            </tbody>
        </table>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub struct BoardProps {
    /// Base URL of the trivia API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api: String,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Fetch categories one at a time instead of all at once
    #[arg(long)]
    pub sequential: bool,

    /// How many categories to list when picking the board
    #[arg(long, default_value_t = game::LoadOptions::default().pool_size)]
    pub pool: usize,
}

impl Default for BoardProps {
    fn default() -> Self {
        Self {
            api: DEFAULT_API_URL.to_string(),
            seed: None,
            sequential: false,
            pool: game::LoadOptions::default().pool_size,
        }
    }
}

impl BoardProps {
    fn load_options(&self) -> game::LoadOptions {
        game::LoadOptions {
            pool_size: self.pool,
            fetch_mode: if self.sequential {
                game::FetchMode::Sequential
            } else {
                game::FetchMode::Parallel
            },
            ..Default::default()
        }
    }
}

fn button_label(status: &game::LoadStatus) -> &'static str {
    use game::LoadStatus::*;
    match status {
        Idle => "Start New Game",
        Loading => "Loading…",
        Ready => "Restart",
        Failed(_) => "Try Again",
    }
}

/// Owns the session and wires the start button and cell clicks into it.
pub struct BoardView {
    session: game::Session,
    source: HttpTriviaSource,
    options: game::LoadOptions,
    fixed_seed: Option<u64>,
}

impl BoardView {
    fn next_seed(&self) -> u64 {
        match self.fixed_seed {
            Some(seed) => seed.wrapping_add(self.session.generation()),
            None => js_random_seed(),
        }
    }

    fn start_load(&mut self, ctx: &Context<Self>) {
        let seed = self.next_seed();
        let ticket = self.session.begin_load();
        let source = self.source.clone();
        let options = self.options;
        log::debug!("seed: {}", seed);

        ctx.link().send_future(async move {
            let mut rng = SmallRng::seed_from_u64(seed);
            let result = game::load_board(&source, &mut rng, &options).await;
            Msg::Loaded(ticket, result)
        });
    }
}

impl Component for BoardView {
    type Message = Msg;
    type Properties = BoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            session: game::Session::new(),
            source: HttpTriviaSource::new(&props.api),
            options: props.load_options(),
            fixed_seed: props.seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => {
                self.start_load(ctx);
                true
            }
            Loaded(ticket, result) => match self.session.finish_load(ticket, result) {
                Ok(()) => true,
                Err(err) if err.is_ignorable() => {
                    log::debug!("ignored load result: {}", err);
                    false
                }
                Err(_) => true,
            },
            Activate(activation) => match self.session.activate(activation) {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::debug!("ignored activation {:?}: {}", activation, err);
                    false
                }
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use game::LoadStatus::*;

        let status = self.session.status();
        let onclick = ctx.link().callback(|e: MouseEvent| {
            e.prevent_default();
            Msg::Start
        });
        let onactivate = ctx.link().callback(Msg::Activate);

        let content = match status {
            Idle => html! {},
            Loading => html! { <div class="spinner" aria-busy="true"/> },
            Failed(reason) => html! {
                <p class="error">
                    {"Failed to load, try again."}
                    <small>{reason.clone()}</small>
                </p>
            },
            Ready => html! {
                <BoardGrid
                    surface={self.session.surface().clone()}
                    generation={self.session.generation()}
                    {onactivate}
                />
            },
        };

        html! {
            <div class="jeopardy">
                <h1>{"Jeopardy!"}</h1>
                <nav>
                    <button {onclick} disabled={status.is_loading()}>{button_label(status)}</button>
                </nav>
                {content}
            </div>
        }
    }
}
