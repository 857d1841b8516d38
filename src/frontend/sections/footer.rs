use web_sys::MouseEvent;
use yew::prelude::*;

use crate::frontend::{scroll_to_section, scroll_to_top};

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("Home", "home"),
    ("Projects", "projects"),
    ("About", "about"),
    ("Contact", "contact"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/Clash786"),
    ("LinkedIn", "https://www.linkedin.com/in/m-umair-anjum-2aa193397"),
    // No channel yet; the link is a placeholder until one exists.
    ("YouTube", "#"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    let nav_click = |id: &'static str| {
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            scroll_to_section(id);
        })
    };

    let on_back_to_top = Callback::from(|_| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <a href="#home" class="footer-logo" onclick={nav_click("home")}>
                    {"Umair"}<span class="accent">{" Anjum"}</span>
                </a>

                <p class="footer-tagline">
                    {"Crafting digital experiences with code and creativity. Let's build \
                      something amazing together."}
                </p>

                <nav class="footer-nav">
                    { for FOOTER_LINKS.iter().map(|&(label, id)| html! {
                        <a key={id} href={format!("#{id}")} onclick={nav_click(id)}>
                            {label}
                        </a>
                    }) }
                </nav>

                <div class="footer-socials">
                    { for SOCIAL_LINKS.iter().map(|(label, href)| html! {
                        <a
                            key={*label}
                            href={*href}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link"
                            aria-label={*label}
                        >
                            {*label}
                        </a>
                    }) }
                </div>

                <div class="footer-bar">
                    <p>{format!("© {year} Umair Anjum. Made with ♥ in Pakistan")}</p>
                    <button type="button" class="back-to-top" onclick={on_back_to_top}>
                        {"Back to top ↑"}
                    </button>
                </div>
            </div>
        </footer>
    }
}
