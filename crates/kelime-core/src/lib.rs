pub mod backup;
pub mod favorites;
pub mod game;
pub mod history;
