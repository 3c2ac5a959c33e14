pub mod download_click;
pub mod game;
pub mod status_check;
