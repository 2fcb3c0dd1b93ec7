//! Widgets composing the catalog UI.

pub mod menu;
pub mod movie_form;
pub mod movie_list;
pub mod popup;
