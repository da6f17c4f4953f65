pub mod board_screen;
pub mod collect_screen;
pub mod grid;
pub mod input;
pub mod notice;
pub mod size_screen;
