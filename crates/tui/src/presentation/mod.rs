//! Terminal rendering: session setup, mode routing, and widgets.

pub mod terminal;
pub mod ui;
pub mod widgets;
