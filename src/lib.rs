pub mod collision;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod keys;
pub mod logging;
pub mod movement;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod settings;
pub mod snake;
pub mod speed;
pub mod terminal_runtime;
pub mod ui;
