use alloc::string::{String, ToString};

use crate::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

impl LoadStatus {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Tag handed out when a load starts; only the ticket of the latest load is accepted back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

/// A click on a clue cell, tagged with the generation of the board it was drawn from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellActivation {
    pub generation: u64,
    pub coords: Coord2,
}

/// Owns the current board and its surface, and serializes loads through a generation counter.
#[derive(Clone, Debug, Default)]
pub struct Session {
    generation: u64,
    status: LoadStatus,
    board: Option<Board>,
    surface: BoardSurface,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn surface(&self) -> &BoardSurface {
        &self.surface
    }

    /// Starts a new load, wiping the current board. Results tagged with older tickets are refused from now on.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation = self.generation.wrapping_add(1);
        self.board = None;
        self.surface.clear();
        self.status = LoadStatus::Loading;
        log::debug!("begin load, generation {}", self.generation);
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Installs the result of the load identified by `ticket`.
    ///
    /// A superseded ticket yields `StaleLoad` and changes nothing. A failed load leaves the board empty, marks the
    /// session as failed and hands the error back.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Board>) -> Result<()> {
        self.check_generation(ticket.generation)?;

        match result {
            Ok(board) => {
                self.surface.paint(&board);
                self.board = Some(board);
                self.status = LoadStatus::Ready;
                log::debug!("board ready, generation {}", self.generation);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to load board: {}", err);
                self.board = None;
                self.surface.clear();
                self.status = LoadStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Reveals the activated clue and pushes the new text into the surface.
    pub fn activate(&mut self, activation: CellActivation) -> Result<RevealOutcome> {
        let board = self.board.as_mut().ok_or(GameError::NotLoaded)?;
        if activation.generation != self.generation {
            return Err(GameError::StaleLoad);
        }

        let outcome = board.reveal(activation.coords)?;
        self.surface.update_cell(activation.coords, &outcome);
        Ok(outcome)
    }

    fn check_generation(&self, generation: u64) -> Result<()> {
        if generation == self.generation {
            Ok(())
        } else {
            log::debug!(
                "dropping stale result of generation {}, current is {}",
                generation,
                self.generation
            );
            Err(GameError::StaleLoad)
        }
    }
}
