use battleship_bench::{
    BoardContent, BoardIndex, ShotRecord, SinglePlayerGame, SinglePlayerGameState, SquareContent,
    MAX_SHOTS,
};
use uuid::Uuid;

fn ix(label: &str) -> BoardIndex {
    label.parse().unwrap()
}

fn water_game() -> SinglePlayerGame {
    SinglePlayerGame::new(Uuid::nil(), 4711, BoardContent::new(SquareContent::Water))
}

/// Water board with a two-square ship on A1/B1.
fn destroyer_game() -> SinglePlayerGame {
    let mut board = BoardContent::new(SquareContent::Water);
    board[ix("A1")] = SquareContent::Ship;
    board[ix("B1")] = SquareContent::Ship;
    SinglePlayerGame::new(Uuid::nil(), 4711, board)
}

#[test]
fn new_game_is_empty() {
    let game = water_game();
    assert_eq!(game.player_index(), 4711);
    assert_eq!(game.number_of_shots(), 0);
    assert_eq!(game.last_shot(), None);
    assert_eq!(game.shooting_board().count(SquareContent::Unknown), 100);
}

#[test]
fn shoot_into_water() {
    let mut game = water_game();
    assert_eq!(game.shoot(ix("A1")), SquareContent::Water);
    assert_eq!(game.shooting_board()[ix("A1")], SquareContent::Water);
    assert_eq!(game.log(), &[ShotRecord::new(ix("A1"), SquareContent::Water)]);
}

#[test]
fn shoot_ship_without_sinking() {
    let mut game = destroyer_game();
    assert_eq!(game.shoot(ix("A1")), SquareContent::HitShip);
    assert_eq!(game.shooting_board()[ix("A1")], SquareContent::HitShip);
    assert_eq!(game.shooting_board()[ix("B1")], SquareContent::Unknown);
    assert_eq!(game.board()[ix("B1")], SquareContent::Ship);
}

#[test]
fn last_hit_sinks_ship() {
    let mut game = destroyer_game();
    assert_eq!(game.shoot(ix("A1")), SquareContent::HitShip);
    assert_eq!(game.shoot(ix("B1")), SquareContent::SunkenShip);
    assert_eq!(game.shooting_board()[ix("A1")], SquareContent::SunkenShip);
    assert_eq!(game.shooting_board()[ix("B1")], SquareContent::SunkenShip);
    assert_eq!(game.log()[1], ShotRecord::new(ix("B1"), SquareContent::SunkenShip));
    // the ship board itself is never touched
    assert_eq!(game.board()[ix("A1")], SquareContent::Ship);
}

#[test]
fn vertical_ship_sinks() {
    let mut board = BoardContent::new(SquareContent::Water);
    for label in ["C3", "C4", "C5"] {
        board[ix(label)] = SquareContent::Ship;
    }
    let mut game = SinglePlayerGame::new(Uuid::nil(), 0, board);
    assert_eq!(game.shoot(ix("C4")), SquareContent::HitShip);
    assert_eq!(game.shoot(ix("C3")), SquareContent::HitShip);
    assert_eq!(game.shoot(ix("C5")), SquareContent::SunkenShip);
    assert_eq!(game.shooting_board().count(SquareContent::SunkenShip), 3);
}

#[test]
fn repeated_shots_are_logged() {
    let mut game = water_game();
    assert_eq!(game.shoot(ix("A1")), SquareContent::Water);
    assert_eq!(game.shoot(ix("A1")), SquareContent::Water);
    assert_eq!(game.number_of_shots(), 2);
    assert_eq!(game.log()[0].location, BoardIndex::new(0).unwrap());
}

#[test]
fn reshooting_sunken_ship_reads_ship_board() {
    let mut game = destroyer_game();
    game.shoot(ix("A1"));
    game.shoot(ix("B1"));
    // the ship board still says Ship, so this is a fresh hit
    assert_eq!(game.shoot(ix("A1")), SquareContent::HitShip);
    assert_eq!(game.number_of_shots(), 3);
}

#[test]
fn last_shot_follows_log() {
    let mut game = water_game();
    game.shoot(ix("A1"));
    assert_eq!(game.last_shot(), Some(ix("A1")));
    game.shoot(ix("B1"));
    assert_eq!(game.last_shot(), Some(ix("B1")));
}

#[test]
fn game_state_in_progress() {
    let mut shooting = BoardContent::new(SquareContent::Unknown);
    shooting[ix("A1")] = SquareContent::HitShip;
    let game = SinglePlayerGame::from_parts(
        Uuid::nil(),
        0,
        BoardContent::new(SquareContent::Water),
        shooting,
        Vec::new(),
    );
    assert_eq!(game.game_state(&[1, 1]), SinglePlayerGameState::InProgress);
    assert_eq!(game.game_state(&[1]), SinglePlayerGameState::AllShipsSunken);
}

#[test]
fn game_state_all_ships_sunken() {
    let mut game = destroyer_game();
    game.shoot(ix("A1"));
    assert_eq!(game.game_state(&[2]), SinglePlayerGameState::InProgress);
    game.shoot(ix("B1"));
    assert_eq!(game.game_state(&[2]), SinglePlayerGameState::AllShipsSunken);
}

#[test]
fn too_many_shots() {
    let mut game = water_game();
    for _ in 0..=MAX_SHOTS {
        assert_eq!(game.game_state(&[1]), SinglePlayerGameState::InProgress);
        game.shoot(ix("A1"));
    }
    assert_eq!(game.game_state(&[1]), SinglePlayerGameState::TooManyShots);
}

#[test]
fn win_on_the_cap_is_still_a_win() {
    let mut game = destroyer_game();
    for _ in 0..MAX_SHOTS - 2 {
        game.shoot(ix("J10"));
    }
    game.shoot(ix("A1"));
    game.shoot(ix("B1"));
    assert_eq!(game.number_of_shots(), MAX_SHOTS);
    assert_eq!(game.game_state(&[2]), SinglePlayerGameState::AllShipsSunken);

    game.shoot(ix("J10"));
    assert_eq!(game.game_state(&[2]), SinglePlayerGameState::TooManyShots);
}

#[test]
fn touching_ships_never_sink() {
    let mut board = BoardContent::new(SquareContent::Water);
    for label in ["A1", "B1", "B2"] {
        board[ix(label)] = SquareContent::Ship;
    }
    let mut game = SinglePlayerGame::new(Uuid::nil(), 0, board);
    for label in ["A1", "B1", "B2"] {
        assert_eq!(game.shoot(ix(label)), SquareContent::HitShip, "{label}");
    }
    assert_eq!(game.shooting_board().count(SquareContent::HitShip), 3);
    assert_eq!(game.shooting_board().count(SquareContent::SunkenShip), 0);
}
