//! Sidebar Toggle
//!
//! The hamburger button and the backdrop overlay both flip the same
//! expanded/collapsed state; panel, overlay and button classes follow it together.

use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Update};
use web_sys::Element;

use crate::config::SidebarConfig;

/// Shared expanded/collapsed flag of the navigation panel
#[derive(Clone, Copy)]
pub struct PanelVisibility {
    expanded: RwSignal<bool>,
}

impl PanelVisibility {
    pub fn new(expanded: bool) -> Self {
        Self {
            expanded: RwSignal::new(expanded),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get_untracked()
    }

    /// Flip the flag and return the new state
    pub fn toggle(&self) -> bool {
        self.expanded.update(|expanded| *expanded = !*expanded);
        self.is_expanded()
    }
}

/// Class updates for the present `[panel, overlay, toggle]` handles.
/// Every present handle gets the same on/off value; absent ones are skipped.
fn class_targets<'a, T>(
    [panel, overlay, toggle]: [Option<&'a T>; 3],
    config: &'a SidebarConfig,
    expanded: bool,
) -> Vec<(&'a T, &'a str, bool)> {
    [
        (panel, config.panel_class.as_str()),
        (overlay, config.overlay_class.as_str()),
        (toggle, config.toggle_class.as_str()),
    ]
    .into_iter()
    .filter_map(|(handle, class)| handle.map(|handle| (handle, class, expanded)))
    .collect()
}

/// Sidebar elements present on this page
pub struct SidebarToggler {
    visibility: PanelVisibility,
    toggle: Option<Element>,
    overlay: Option<Element>,
    panel: Option<Element>,
    config: SidebarConfig,
}

impl SidebarToggler {
    /// Look up the sidebar elements. Initial state follows the panel's class.
    pub fn from_page(config: &SidebarConfig) -> Self {
        let toggle = page_dom::element_by_id(&config.toggle_id);
        let overlay = page_dom::element_by_id(&config.overlay_id);
        let panel = page_dom::element_by_id(&config.panel_id);
        let expanded = panel
            .as_ref()
            .is_some_and(|el| page_dom::has_class(el, &config.panel_class));

        Self {
            visibility: PanelVisibility::new(expanded),
            toggle,
            overlay,
            panel,
            config: config.clone(),
        }
    }

    /// Whether any trigger exists to toggle with
    pub fn has_triggers(&self) -> bool {
        self.toggle.is_some() || self.overlay.is_some()
    }

    pub fn toggle(&self) {
        let expanded = self.visibility.toggle();
        self.sync(expanded);
        log::debug!("sidebar {}", if expanded { "expanded" } else { "collapsed" });
    }

    /// Set all three presentation classes from one state value
    fn sync(&self, expanded: bool) {
        let targets = class_targets(
            [self.panel.as_ref(), self.overlay.as_ref(), self.toggle.as_ref()],
            &self.config,
            expanded,
        );
        for (el, class, on) in targets {
            page_dom::set_class(el, class, on);
        }
    }

    /// Toggle on clicks of the button or the overlay, whichever exist
    pub fn attach(self: &Rc<Self>) {
        for trigger in [&self.toggle, &self.overlay].into_iter().flatten() {
            let sidebar = Rc::clone(self);
            page_dom::on_event(trigger, "click", move |_| sidebar.toggle());
        }
    }
}
