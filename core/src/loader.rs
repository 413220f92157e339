use alloc::vec::Vec;
use core::future::Future;
use futures_util::future::try_join_all;
use rand::Rng;

use crate::*;

/// Remote collaborator that knows how to list categories and fetch their clues.
pub trait TriviaSource {
    /// Lists `count` categories starting at `offset` in the upstream catalogue.
    fn fetch_category_ids(
        &self,
        count: usize,
        offset: u32,
    ) -> impl Future<Output = Result<Vec<CategoryRef>>>;

    /// Fetches one category with all of its clues, every clue starting out hidden.
    fn fetch_category(&self, id: CategoryId) -> impl Future<Output = Result<Category>>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// One request at a time, in listing order.
    Sequential,
    /// All requests in flight at once, merged back in listing order.
    #[default]
    Parallel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// How many category listings to request when picking the board's categories.
    pub pool_size: usize,
    /// Exclusive upper bound for the random listing offset.
    pub max_offset: u32,
    pub fetch_mode: FetchMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            pool_size: 100,
            max_offset: 999,
            fetch_mode: FetchMode::default(),
        }
    }
}

/// Picks `CATEGORY_COUNT` random categories that have enough clues.
pub async fn pick_category_ids<S, R>(
    source: &S,
    rng: &mut R,
    options: &LoadOptions,
) -> Result<Vec<CategoryId>>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let offset = rng.random_range(0..options.max_offset.max(1));
    let count = options.pool_size.max(CATEGORY_COUNT);
    log::debug!("listing {} categories at offset {}", count, offset);

    let mut ids: Vec<CategoryId> = source
        .fetch_category_ids(count, offset)
        .await?
        .into_iter()
        .filter(|listing| listing.clue_count >= CLUES_PER_CATEGORY)
        .map(|listing| listing.id)
        .collect();

    if ids.len() < CATEGORY_COUNT {
        return Err(GameError::Service(alloc::format!(
            "not enough categories, need {} with at least {} clues but got {}",
            CATEGORY_COUNT,
            CLUES_PER_CATEGORY,
            ids.len()
        )));
    }

    shuffle(&mut ids, rng);
    ids.truncate(CATEGORY_COUNT);
    Ok(ids)
}

/// Fetches the given categories, keeping their order regardless of fetch mode.
pub async fn fetch_categories<S>(
    source: &S,
    ids: &[CategoryId],
    fetch_mode: FetchMode,
) -> Result<Vec<Category>>
where
    S: TriviaSource + ?Sized,
{
    match fetch_mode {
        FetchMode::Sequential => {
            let mut categories = Vec::with_capacity(ids.len());
            for &id in ids {
                categories.push(source.fetch_category(id).await?);
            }
            Ok(categories)
        }
        FetchMode::Parallel => try_join_all(ids.iter().map(|&id| source.fetch_category(id))).await,
    }
}

/// Builds a complete new board from the source. Any failure aborts the whole load.
pub async fn load_board<S, R>(source: &S, rng: &mut R, options: &LoadOptions) -> Result<Board>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let ids = pick_category_ids(source, rng, options).await?;
    log::debug!("chosen categories: {:?}", ids);

    let categories = fetch_categories(source, &ids, options.fetch_mode)
        .await?
        .into_iter()
        .map(Category::fit_to_board)
        .collect();

    Board::from_categories(categories)
}
