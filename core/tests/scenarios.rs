//! Small hand-checked games.

use minesweep_core::*;

fn layout_board(size: Coord2, mines: &[Coord2]) -> Board<LayoutGenerator> {
    let layout = MineLayout::from_mine_coords(size, mines).unwrap();
    Board::with_generator(size, LayoutGenerator::new(layout)).unwrap()
}

#[test]
fn empty_board_opens_completely() {
    let mut board = Board::new(GameConfig::new((5, 5), 0).unwrap()).unwrap();

    let outcome = board.click((2, 2)).unwrap();

    assert_eq!(outcome.state, BoardState::Win);
    assert_eq!(outcome.reveals.len(), 25);
    assert_eq!(board.revealed_count(), 25);
    assert!(iter_positions((5, 5)).all(|coords| board.cell_at(coords) == Ok(CellView::Revealed(0))));
}

#[test]
fn two_mines_every_reveal_has_a_count() {
    // . . . . .
    // . * . . .
    // . . . . .
    // . * . . .
    // . . . . .
    let mut board = layout_board((5, 5), &[(1, 1), (1, 3)]);

    let outcome = board.click((3, 2)).unwrap();

    assert_eq!(outcome.state, BoardState::Playing);
    assert!(!outcome.reveals.is_empty());
    for event in &outcome.reveals {
        assert_eq!(
            board.cell_at(event.position),
            Ok(CellView::Revealed(event.neighbor_mines))
        );
    }
    let at = |position: Coord2| {
        outcome
            .reveals
            .iter()
            .find(|event| event.position == position)
            .map(|event| event.neighbor_mines)
    };
    assert_eq!(at((2, 2)), Some(2));
    assert_eq!(at((2, 0)), Some(1));
    assert_eq!(at((4, 4)), Some(0));
    assert_eq!(at((0, 0)), None);
}

#[test]
fn mine_after_safe_start_ends_game() {
    let mut board = layout_board((5, 5), &[(2, 2)]);

    let first = board.click((2, 3)).unwrap();
    assert_eq!(first.state, BoardState::Playing);

    let second = board.click((2, 2)).unwrap();
    assert_eq!(second.state, BoardState::Dead);
    assert!(second.reveals.is_empty());
    assert_eq!(board.state(), BoardState::Dead);
}

#[test]
fn single_safe_cell_wins_on_first_click() {
    for seed in 0..8 {
        let mut board = Board::with_seed(GameConfig::new((5, 5), 24).unwrap(), seed).unwrap();

        let outcome = board.click((0, 4)).unwrap();

        assert_eq!(outcome.state, BoardState::Win);
        assert_eq!(outcome.reveals.len(), 1);
        assert_eq!(outcome.reveals[0].neighbor_mines, 3);
    }
}

#[test]
fn invalid_mine_counts_are_rejected() {
    let err = Board::new(GameConfig::new_unchecked((5, 5), 25)).unwrap_err();
    assert_eq!(
        err,
        GameError::TooManyMines {
            mines: 25,
            capacity: 25
        }
    );
    assert!(err.is_invalid_configuration());
}

#[test]
fn win_needs_every_safe_cell() {
    // * . *
    let mut board = layout_board((3, 1), &[(0, 0), (2, 0)]);

    let outcome = board.click((1, 0)).unwrap();

    assert_eq!(outcome.state, BoardState::Win);
    assert_eq!(outcome.reveals[0].neighbor_mines, 2);

    // . * .
    let mut board = layout_board((3, 1), &[(1, 0)]);
    assert_eq!(board.click((0, 0)).unwrap().state, BoardState::Playing);
    assert_eq!(board.click((2, 0)).unwrap().state, BoardState::Win);
}
