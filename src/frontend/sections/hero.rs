use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::frontend::scroll_to_section;

const HERO_ROLE: &str = "Software & Web Developer | Freelancer";
const TYPE_INTERVAL_MS: u32 = 50;
const CURSOR_BLINK_MS: u32 = 530;
const PARTICLE_COUNT: usize = 50;

struct Particle {
    left_pct: f64,
    top_pct: f64,
    delay_s: f64,
    duration_s: f64,
}

fn scatter_particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| Particle {
            left_pct: js_sys::Math::random() * 100.0,
            top_pct: js_sys::Math::random() * 100.0,
            delay_s: js_sys::Math::random() * 8.0,
            duration_s: 6.0 + js_sys::Math::random() * 6.0,
        })
        .collect()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    // The hero reveals on mount rather than waiting for an observer; it is
    // already in the viewport when the page loads.
    let revealed = use_state(|| false);
    let typed_chars = use_state(|| 0usize);
    let cursor_on = use_state(|| true);
    let particles = use_memo((), |_| scatter_particles());

    {
        let revealed = revealed.clone();
        let typed_chars = typed_chars.clone();
        use_effect_with((), move |_| {
            revealed.set(true);

            // The interval drops itself once the full line has been typed;
            // taking it out of the slot breaks the Rc cycle with its own
            // callback.
            let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
            let finished_slot = slot.clone();
            let mut index = 0usize;
            let total = HERO_ROLE.chars().count();

            *slot.borrow_mut() = Some(Interval::new(TYPE_INTERVAL_MS, move || {
                if index >= total {
                    finished_slot.borrow_mut().take();
                    return;
                }
                index += 1;
                typed_chars.set(index);
            }));

            move || {
                slot.borrow_mut().take();
            }
        });
    }

    {
        let cursor_on = cursor_on.clone();
        use_effect_with((), move |_| {
            let mut on = true;
            let blink = Interval::new(CURSOR_BLINK_MS, move || {
                on = !on;
                cursor_on.set(on);
            });
            move || drop(blink)
        });
    }

    let typed: String = HERO_ROLE.chars().take(*typed_chars).collect();

    let on_view_work = Callback::from(|_| scroll_to_section("projects"));
    let on_contact = Callback::from(|_| scroll_to_section("contact"));

    let reveal_class = |base: &'static str| classes!(base, revealed.then_some("is-revealed"));

    html! {
        <section id="home" class="hero-section">
            <div class="hero-backdrop" aria-hidden="true">
                <div class="orb orb-left" />
                <div class="orb orb-right" />
                <div class="orb orb-center" />
                <div class="particle-field">
                    { for particles.iter().map(|p| html! {
                        <div
                            class="particle"
                            style={format!(
                                "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                                p.left_pct, p.top_pct, p.delay_s, p.duration_s
                            )}
                        />
                    }) }
                </div>
                <div class="grid-overlay" />
            </div>

            <div class="hero-content">
                <div class={reveal_class("hero-portrait reveal-left")} style="transition-delay: 300ms;">
                    <div class="portrait-glow" aria-hidden="true" />
                    <div class="portrait-frame">
                        <img src="/profile-photo.jpg" alt="Umair Anjum" />
                    </div>
                </div>

                <div class="hero-copy">
                    <div class={reveal_class("reveal-up")} style="transition-delay: 500ms;">
                        <span class="badge">{"Welcome to my portfolio"}</span>
                    </div>

                    <h1 class={reveal_class("reveal-up")} style="transition-delay: 600ms;">
                        {"Hi, I'm "}<span class="text-gradient">{"Umair Anjum"}</span>
                    </h1>

                    <div class={reveal_class("hero-role reveal-up")} style="transition-delay: 800ms;">
                        <span class="typed-text">
                            {typed}
                            <span class={classes!("typed-cursor", (!*cursor_on).then_some("is-hidden"))} />
                        </span>
                    </div>

                    <p class={reveal_class("hero-lede reveal-up")} style="transition-delay: 1000ms;">
                        {"Crafting digital experiences with code and creativity. I build scalable \
                          web applications, multilingual systems, and deliver innovative solutions \
                          that make an impact."}
                    </p>

                    <div class={reveal_class("hero-actions reveal-up")} style="transition-delay: 1200ms;">
                        <button type="button" class="button-primary" onclick={on_view_work}>
                            {"View My Work"}<span class="icon" aria-hidden="true">{"↓"}</span>
                        </button>
                        <button type="button" class="button-outline" onclick={on_contact}>
                            {"Contact Me"}
                        </button>
                    </div>

                    <div class={reveal_class("hero-socials reveal-up")} style="transition-delay: 1400ms;">
                        <a
                            href="https://github.com/Clash786"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link"
                            aria-label="GitHub"
                        >
                            {"GitHub"}
                        </a>
                        <a
                            href="https://www.linkedin.com/in/m-umair-anjum-2aa193397"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="social-link"
                            aria-label="LinkedIn"
                        >
                            {"LinkedIn"}
                        </a>
                    </div>
                </div>
            </div>

            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-mouse"><div class="scroll-wheel" /></div>
            </div>
        </section>
    }
}
