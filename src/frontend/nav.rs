use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::frontend::scroll_to_section;
use crate::logic::{active_section, is_compact_nav, MenuState, SECTION_IDS};

const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("Projects", "projects"),
    ("About", "about"),
    ("Experience", "experience"),
    ("Contact", "contact"),
];

/// Reads each section's document offset and derives the active section for
/// the current scroll position. Sections not yet in the DOM are skipped.
fn current_active_section(scroll_y: f64) -> &'static str {
    let Some(document) = window().and_then(|w| w.document()) else {
        return SECTION_IDS[0];
    };

    let tops: Vec<(&'static str, f64)> = SECTION_IDS
        .iter()
        .filter_map(|id| {
            document
                .get_element_by_id(id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .map(|element| (*id, f64::from(element.offset_top())))
        })
        .collect();

    if tops.is_empty() {
        SECTION_IDS[0]
    } else {
        active_section(&tops, scroll_y)
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub scroll_y: f64,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu = use_state(MenuState::default);
    let compact = is_compact_nav(props.scroll_y);
    let active = current_active_section(props.scroll_y);

    // Link activation is one atomic action: scroll and, if the mobile menu
    // was open, close it.
    let nav_click = |id: &'static str| {
        let menu = menu.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(id);
            menu.set(MenuState::Closed);
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set((*menu).toggled()))
    };

    let on_close_menu = {
        let menu = menu.clone();
        Callback::from(move |_| menu.set(MenuState::Closed))
    };

    let menu_open = (*menu).is_open();

    html! {
        <>
            <nav class={classes!("site-nav", compact.then_some("is-compact"))}>
                <div class="nav-inner">
                    <a href="#home" class="nav-logo" onclick={nav_click("home")}>
                        {"Umair"}<span class="accent">{" Anjum"}</span>
                    </a>

                    <div class="nav-links">
                        { for NAV_LINKS.iter().map(|&(label, id)| html! {
                            <a
                                key={id}
                                href={format!("#{id}")}
                                class={classes!("nav-link", (active == id).then_some("is-active"))}
                                onclick={nav_click(id)}
                            >
                                {label}
                            </a>
                        }) }
                    </div>

                    <a href="#contact" class="nav-cta" onclick={nav_click("contact")}>
                        {"Hire Me"}
                    </a>

                    <button
                        type="button"
                        class="nav-menu-button"
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{ if menu_open { "✕" } else { "☰" } }</span>
                    </button>
                </div>
            </nav>

            <div class={classes!("mobile-menu", menu_open.then_some("is-open"))}>
                <div class="mobile-menu-backdrop" onclick={on_close_menu} />
                <div class="mobile-menu-panel">
                    { for NAV_LINKS.iter().map(|&(label, id)| html! {
                        <a
                            key={id}
                            href={format!("#{id}")}
                            class={classes!("mobile-menu-link", (active == id).then_some("is-active"))}
                            onclick={nav_click(id)}
                        >
                            {label}
                        </a>
                    }) }
                    <a href="#contact" class="mobile-menu-cta" onclick={nav_click("contact")}>
                        {"Hire Me"}
                    </a>
                </div>
            </div>
        </>
    }
}
