//! Problem Board Page Setup
//!
//! Wires the flash dismissal, card filter and sidebar toggle once the page is
//! ready. Each behavior attaches on its own; a missing element only disables
//! the behavior that needed it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::EnhanceConfig;
use crate::filter::CardFilter;
use crate::flash;
use crate::sidebar::SidebarToggler;

thread_local! {
    /// Filter installed at page-ready, for `filterProblems()` calls from page scripts
    static CARD_FILTER: RefCell<Option<Rc<CardFilter>>> = const { RefCell::new(None) };
}

pub fn init(config: &EnhanceConfig) {
    // Flash messages
    let flashes = flash::dismiss_all(&config.flash);

    // Problem search & filters
    let filter = Rc::new(CardFilter::from_page(&config.filter));
    filter.attach();
    CARD_FILTER.with(|slot| *slot.borrow_mut() = Some(filter));

    // Sidebar
    let sidebar = SidebarToggler::from_page(&config.sidebar);
    let has_sidebar = sidebar.has_triggers();
    if has_sidebar {
        Rc::new(sidebar).attach();
    } else {
        log::debug!("no sidebar triggers on page");
    }

    log::info!("ready: {} flash messages, sidebar={}", flashes, has_sidebar);
}

/// Re-run the card filter against the current inputs.
/// Returns the number of visible cards; 0 before the page is ready.
#[wasm_bindgen(js_name = filterProblems)]
pub fn filter_problems() -> usize {
    let filter = CARD_FILTER.with(|slot| slot.borrow().clone());
    match filter {
        Some(filter) => filter.apply(),
        None => 0,
    }
}
