use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;

use self::hooks::use_scroll_offset;
use self::nav::Navigation;
use self::sections::about::About;
use self::sections::contact::Contact;
use self::sections::experience::Experience;
use self::sections::footer::Footer;
use self::sections::hero::Hero;
use self::sections::projects::Projects;
use self::sections::services::Services;
use self::sections::stats::Stats;

mod hooks;
mod nav;
mod sections;

/// Smooth-scrolls the viewport to the section landmark with the given id.
/// A missing element means no navigation, not an error.
pub(crate) fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(target) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub(crate) fn scroll_to_top() {
    if let Some(win) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

/// Page shell: owns the scroll offset and hands read-only views down. The
/// sections themselves only consume their own reveal state.
#[function_component(App)]
fn app() -> Html {
    let scroll_y = use_scroll_offset();

    html! {
        <div class="page-shell">
            <Navigation scroll_y={scroll_y} />
            <main>
                <Hero />
                <Stats />
                <Projects />
                <Services />
                <About />
                <Experience />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
