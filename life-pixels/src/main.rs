#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod app;

use life_board::Board;

const BOARD_SIZE: i32 = 100;

fn main() {
    env_logger::init();
    let board = Board::new(BOARD_SIZE).unwrap();
    app::run(board);
}
