//! Mode-routed render entry point.
//!
//! Full-screen modes (menu, list, form) replace the whole frame;
//! prompt and popup modes render their backdrop first and then a
//! centered modal on top.

use ratatui::Frame;
use reelshelf_core::MovieStore;

use crate::{
    presentation::widgets,
    state::{AppMode, BackTo, ListCursor, MenuState},
};

/// Everything the renderer needs for one frame.
pub struct RenderContext<'a> {
    pub store: &'a MovieStore,
    pub mode: &'a AppMode,
    pub menu: &'a MenuState,
    pub cursor: &'a ListCursor,
    pub page_size: usize,
}

pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let area = frame.area();

    match ctx.mode {
        AppMode::Menu => widgets::menu::render(frame, area, ctx.menu),
        AppMode::MovieList => {
            widgets::movie_list::render(frame, area, ctx.store, ctx.cursor, ctx.page_size);
        }
        AppMode::MovieForm(form) => widgets::movie_form::render(frame, area, form),
        AppMode::RatePrompt(rate) => {
            widgets::movie_list::render(frame, area, ctx.store, ctx.cursor, ctx.page_size);
            let title = ctx.store.get(rate.index).map(|m| m.title()).unwrap_or("?");
            widgets::popup::render_rate_prompt(frame, title, rate.error.as_deref());
        }
        AppMode::ConfirmDelete { index } => {
            widgets::movie_list::render(frame, area, ctx.store, ctx.cursor, ctx.page_size);
            let title = ctx.store.get(*index).map(|m| m.title()).unwrap_or("?");
            widgets::popup::render_confirm_delete(frame, title);
        }
        AppMode::FindPrompt(find) => {
            widgets::movie_list::render(frame, area, ctx.store, ctx.cursor, ctx.page_size);
            widgets::popup::render_find_prompt(frame, &find.query);
        }
        AppMode::Popup(popup) => {
            match popup.back {
                BackTo::Menu => widgets::menu::render(frame, area, ctx.menu),
                BackTo::List => {
                    widgets::movie_list::render(frame, area, ctx.store, ctx.cursor, ctx.page_size);
                }
            }
            widgets::popup::render_message(frame, popup);
        }
    }
}
