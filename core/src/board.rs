use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions: `Playing -> Dead` and `Playing -> Win`, both terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    #[default]
    Playing,
    Dead,
    Win,
}

impl BoardState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Dead | Self::Win)
    }
}

/// Cell grid committed on the first click.
#[derive(Clone, Debug, PartialEq)]
struct Minefield {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Minefield {
    fn generate<G: MinefieldGenerator>(generator: &mut G, size: Coord2, safe: Coord2) -> Result<Self> {
        let mut mine_mask = generator.generate(size, safe)?;
        if mine_mask.dim() != (usize::from(size.0), usize::from(size.1)) {
            return Err(GameError::InvalidBoardShape);
        }

        if mine_mask[safe.to_nd_index()] {
            log::warn!("Mine layout covers the starting cell {:?}, cleared it", safe);
            mine_mask[safe.to_nd_index()] = false;
        }

        let field = Self::from_mine_mask(&mine_mask);
        log::debug!(
            "Initialized {}x{} board with {} mines, starting at {:?}",
            size.0,
            size.1,
            field.mine_count,
            safe
        );
        Ok(field)
    }

    fn from_mine_mask(mine_mask: &Array2<bool>) -> Self {
        let cells = Array2::from_shape_fn(mine_mask.dim(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Cell {
                has_mine: mine_mask[(x, y)],
                neighbor_mines: mine_mask
                    .neighbors(coords)
                    .filter(|&pos| mine_mask[pos.to_nd_index()])
                    .count() as u8,
                revealed: false,
            }
        });
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        Self { cells, mine_count }
    }

    fn safe_cell_count(&self) -> CellCount {
        self.cells.len() as CellCount - self.mine_count
    }

    /// Reveals `start` and every cell reachable from it through zero-count cells.
    ///
    /// Numbered cells are revealed but not expanded. Cells are marked revealed as soon as they
    /// are queued, so each one is visited at most once.
    fn flood_fill(&mut self, start: Coord2) -> Result<Vec<RevealEvent>> {
        let start_cell = &mut self.cells[start.to_nd_index()];
        if start_cell.has_mine {
            return Err(GameError::FloodFillOnMine);
        }
        if start_cell.revealed {
            return Ok(Vec::new());
        }
        start_cell.revealed = true;

        let mut reveals = Vec::new();
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let neighbor_mines = self.cells[coords.to_nd_index()].neighbor_mines;
            reveals.push(RevealEvent {
                position: coords,
                neighbor_mines,
            });

            if neighbor_mines > 0 {
                continue;
            }

            for pos in self.cells.neighbors(coords) {
                let cell = &mut self.cells[pos.to_nd_index()];
                if !cell.has_mine && !cell.revealed {
                    cell.revealed = true;
                    to_visit.push_back(pos);
                }
            }
        }

        log::trace!("Flood fill from {:?} revealed {} cells", start, reveals.len());
        Ok(reveals)
    }
}

#[derive(Clone, Debug)]
enum Phase<G> {
    /// No mines placed yet, the generator runs on the first click.
    Uninitialized(G),
    Initialized(Minefield),
}

impl<G: MinefieldGenerator> Phase<G> {
    fn minefield(&mut self, size: Coord2, safe: Coord2) -> Result<&mut Minefield> {
        match self {
            Self::Initialized(field) => Ok(field),
            Self::Uninitialized(generator) => {
                let field = Minefield::generate(generator, size, safe)?;
                *self = Self::Initialized(field);
                self.minefield(size, safe)
            }
        }
    }
}

/// A single game, from the first click until it is won or lost.
///
/// Cells are only allocated on the first [`click`](Self::click), which is guaranteed to land on
/// a safe cell.
#[derive(Clone, Debug)]
pub struct Board<G = RandomGenerator> {
    size: Coord2,
    phase: Phase<G>,
    revealed_count: CellCount,
    state: BoardState,
    triggered_mine: Option<Coord2>,
}

impl Board<RandomGenerator> {
    /// Board with `config.mines` mines placed uniformly at random.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Self::with_generator(config.size, RandomGenerator::new(config.mines))
    }

    /// Like [`Board::new`], but the layout only depends on `seed` and the first click.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Self::with_generator(config.size, RandomGenerator::with_seed(config.mines, seed))
    }
}

impl<G: MinefieldGenerator> Board<G> {
    pub fn with_generator(size: Coord2, generator: G) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }
        generator.validate(size)?;

        Ok(Self {
            size,
            phase: Phase::Uninitialized(generator),
            revealed_count: 0,
            state: Default::default(),
            triggered_mine: None,
        })
    }

    /// Reveals the cell at `coords`, placing the mines first if this is the first click.
    ///
    /// Clicking a mine loses the game without revealing anything. Clicking a safe cell reveals
    /// it, flood-filling through zero-count cells, and wins the game once every safe cell is
    /// revealed. Finished boards ignore clicks.
    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        let coords = self.validate_coords(coords)?;
        let field = self.phase.minefield(self.size, coords)?;

        if self.state.is_finished() {
            return Ok(ClickOutcome::without_reveals(self.state));
        }

        if field.cells[coords.to_nd_index()].has_mine {
            self.state = BoardState::Dead;
            self.triggered_mine = Some(coords);
            log::debug!("Mine hit at {:?}, game lost", coords);
            return Ok(ClickOutcome::without_reveals(self.state));
        }

        let reveals = field.flood_fill(coords)?;
        self.revealed_count += reveals.len() as CellCount;

        if self.revealed_count == field.safe_cell_count() {
            self.state = BoardState::Win;
            log::debug!("All {} safe cells revealed, game won", self.revealed_count);
        }

        Ok(ClickOutcome {
            state: self.state,
            reveals,
        })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Whether the mines have been placed, i.e. a valid click has happened.
    pub fn is_initialized(&self) -> bool {
        matches!(self.phase, Phase::Initialized(_))
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Mines on the board, `None` until the first click unless the generator knows it up front.
    pub fn mine_count(&self) -> Option<CellCount> {
        match &self.phase {
            Phase::Uninitialized(generator) => generator.mine_count_hint(),
            Phase::Initialized(field) => Some(field.mine_count),
        }
    }

    /// Safe cells on the board, i.e. reveals needed to win.
    pub fn safe_cell_count(&self) -> Option<CellCount> {
        self.mine_count()
            .map(|mines| mult(self.size.0, self.size.1) - mines)
    }

    /// The mine that ended the game, if it was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// What a player sees at `coords`.
    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.cell(coords)?.map(Cell::view).unwrap_or_default())
    }

    /// Whether `coords` holds a mine, `None` before the mines are placed.
    pub fn has_mine_at(&self, coords: Coord2) -> Result<Option<bool>> {
        Ok(self.cell(coords)?.map(|cell| cell.has_mine))
    }

    /// Full cell state at `coords`, `None` before the mines are placed.
    pub fn cell(&self, coords: Coord2) -> Result<Option<Cell>> {
        let coords = self.validate_coords(coords)?;
        Ok(match &self.phase {
            Phase::Uninitialized(_) => None,
            Phase::Initialized(field) => Some(field.cells[coords.to_nd_index()]),
        })
    }
}
