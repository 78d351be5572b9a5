pub mod app;
pub mod basket;
pub mod card;
pub mod events;
pub mod forms;
pub mod input;
pub mod layout;
pub mod modal;
pub mod page;
pub mod render;
pub mod runtime;
pub mod success;
pub mod terminal_guard;
pub mod theme;
