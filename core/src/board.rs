use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;

use crate::*;

/// Upstream id of a trivia category.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(pub u64);

impl core::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of the category listing, before the clues are fetched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: CategoryId,
    pub clue_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub const PLACEHOLDER_QUESTION: &'static str = "(no clue)";
    pub const PLACEHOLDER_ANSWER: &'static str = "(no answer)";

    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    /// Keeps the first `CLUES_PER_CATEGORY` clues in upstream order, padding with placeholder clues when the
    /// category is short.
    pub fn fit_to_board(mut self) -> Self {
        self.clues.truncate(CLUES_PER_CATEGORY);

        if self.clues.len() < CLUES_PER_CATEGORY {
            log::warn!(
                "Category {:?} only has {} clues, padding to {}",
                self.title,
                self.clues.len(),
                CLUES_PER_CATEGORY
            );
            self.clues.resize_with(CLUES_PER_CATEGORY, || {
                Clue::new(Self::PLACEHOLDER_QUESTION, Self::PLACEHOLDER_ANSWER)
            });
        }

        self
    }
}

/// The full grid for one game: `CATEGORY_COUNT` categories of `CLUES_PER_CATEGORY` clues each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn from_categories(categories: Vec<Category>) -> Result<Self> {
        if categories.len() != CATEGORY_COUNT
            || categories
                .iter()
                .any(|category| category.clues.len() != CLUES_PER_CATEGORY)
        {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    /// Advances the clue at `coords` through Hidden → Question → Answer.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let (x, y) = self.validate_coords(coords)?.to_index();
        let outcome = self.categories[x].clues[y].reveal();
        log::debug!("reveal {:?}: {:?}", coords, outcome);
        Ok(outcome)
    }
}

impl Index<Coord2> for Board {
    type Output = Clue;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.categories[x as usize].clues[y as usize]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    pub(crate) fn category(title: &str) -> Category {
        let clues = (0..CLUES_PER_CATEGORY)
            .map(|i| Clue::new(format!("{title} q{i}"), format!("{title} a{i}")))
            .collect();
        Category::new(title, clues)
    }

    pub(crate) fn board(titles: [&str; CATEGORY_COUNT]) -> Board {
        Board::from_categories(titles.iter().map(|t| category(t)).collect()).unwrap()
    }

    fn sample_board() -> Board {
        board(["Math", "Lit", "Science", "History", "Art", "Music"])
    }

    #[test]
    fn reveal_shows_question_then_answer_then_nothing() {
        let mut math = category("Math");
        math.clues[0] = Clue::new("2+2", "4");
        let mut board = Board::from_categories(vec![
            math,
            category("Lit"),
            category("Science"),
            category("History"),
            category("Art"),
            category("Music"),
        ])
        .unwrap();

        assert_eq!(
            board.reveal((0, 0)).unwrap(),
            RevealOutcome::ShowQuestion("2+2".into())
        );
        assert_eq!(
            board.reveal((0, 0)).unwrap(),
            RevealOutcome::ShowAnswer("4".into())
        );
        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
        assert_eq!(board[(0, 0)].showing(), RevealState::Answer);
    }

    #[test]
    fn reveal_out_of_range_leaves_board_untouched() {
        let mut board = sample_board();
        board.reveal((2, 3)).unwrap();
        let before = board.clone();

        for coords in [(6, 0), (0, 5), (6, 5), (255, 255)] {
            assert_eq!(board.reveal(coords), Err(GameError::OutOfRange));
        }

        assert_eq!(board, before);
    }

    #[test]
    fn reveal_only_touches_target_clue() {
        let mut board = sample_board();

        board.reveal((4, 1)).unwrap();

        for coords in iter_cells() {
            let expected = if coords == (4, 1) {
                RevealState::Question
            } else {
                RevealState::Hidden
            };
            assert_eq!(board[coords].showing(), expected, "{coords:?}");
        }
    }

    #[test]
    fn board_shape_is_enforced() {
        let five: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|t| category(t)).collect();
        assert_eq!(
            Board::from_categories(five),
            Err(GameError::InvalidBoardShape)
        );

        let mut short = sample_board().categories.clone();
        short[3].clues.pop();
        assert_eq!(
            Board::from_categories(short),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn titles_keep_category_order() {
        let board = sample_board();
        let titles: Vec<_> = board.titles().collect();
        assert_eq!(titles, ["Math", "Lit", "Science", "History", "Art", "Music"]);
    }

    fn questions(category: &Category) -> Vec<&str> {
        category.clues().iter().map(Clue::question).collect()
    }

    #[test]
    fn fit_to_board_truncates_long_categories_in_order() {
        let clues = (0..9).map(|i| Clue::new(format!("q{i}"), format!("a{i}"))).collect();
        let fitted = Category::new("Long", clues).fit_to_board();

        assert_eq!(questions(&fitted), ["q0", "q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn fit_to_board_keeps_exact_category_untouched() {
        let clues: Vec<_> = (0..CLUES_PER_CATEGORY)
            .map(|i| Clue::new(format!("q{i}"), format!("a{i}")))
            .collect();
        let category = Category::new("Exact", clues);

        let fitted = category.clone().fit_to_board();

        assert_eq!(fitted, category);
        assert_eq!(questions(&fitted), ["q0", "q1", "q2", "q3", "q4"]);
    }

    #[test]
    fn fit_to_board_pads_short_categories() {
        let clues = vec![Clue::new("q0", "a0"), Clue::new("q1", "a1")];
        let fitted = Category::new("Short", clues).fit_to_board();

        assert_eq!(fitted.clues().len(), CLUES_PER_CATEGORY);
        assert_eq!(&questions(&fitted)[..2], ["q0", "q1"]);
        let placeholders = fitted
            .clues()
            .iter()
            .filter(|clue| clue.question() == Category::PLACEHOLDER_QUESTION)
            .count();
        assert_eq!(placeholders, 3);
    }
}
