use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::frontend::hooks::use_reveal;
use crate::logic::{ContactDraft, CONTACT_EMAIL, SUBMITTED_RESET_MS, SUBMIT_PACING_MS};

const CONTACT_REVEAL_THRESHOLD: f64 = 0.1;

struct ContactLine {
    label: &'static str,
    value: &'static str,
    href: &'static str,
}

const CONTACT_LINES: [ContactLine; 4] = [
    ContactLine {
        label: "Email",
        value: CONTACT_EMAIL,
        href: "mailto:umairanjum7866@gmail.com",
    },
    ContactLine {
        label: "Phone",
        value: "+92 333 1504378",
        href: "tel:+923331504378",
    },
    ContactLine {
        label: "Location",
        value: "Islamabad, Pakistan",
        href: "#",
    },
    ContactLine {
        label: "WhatsApp",
        value: "+92 333 1504378",
        href: "https://wa.me/923331504378",
    },
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/Clash786"),
    ("LinkedIn", "https://www.linkedin.com/in/m-umair-anjum-2aa193397"),
    // No channel yet; the link is a placeholder until one exists.
    ("YouTube", "#"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), CONTACT_REVEAL_THRESHOLD);

    let draft = use_state(ContactDraft::default);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    // Owns the pending "success banner" reset; replacing or dropping it
    // cancels the previous timer, including on unmount.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.name = input.value();
                draft.set(next);
            }
        })
    };

    let on_email = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*draft).clone();
                next.email = input.value();
                draft.set(next);
            }
        })
    };

    let on_message = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*draft).clone();
                next.message = input.value();
                draft.set(next);
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let current = (*draft).clone();
            if *submitting || !current.is_complete() {
                return;
            }

            submitting.set(true);
            let href = current.mailto_href();

            let draft = draft.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                // UX pacing only; the mailto handoff has no completion signal
                // to wait for.
                TimeoutFuture::new(SUBMIT_PACING_MS).await;

                if let Some(win) = window() {
                    let _ = win.location().set_href(&href);
                }

                draft.set(ContactDraft::default());
                submitting.set(false);
                submitted.set(true);

                let submitted = submitted.clone();
                *reset_timer.borrow_mut() = Some(Timeout::new(SUBMITTED_RESET_MS, move || {
                    submitted.set(false);
                }));
            });
        })
    };

    html! {
        <section id="contact" ref={section} class="contact-section">
            <div class="section-inner">
                <div class={classes!("section-header", "reveal-up", revealed.then_some("is-revealed"))}>
                    <span class="badge">{"Get In Touch"}</span>
                    <h2>{"Let's "}<span class="text-gradient">{"Connect"}</span></h2>
                    <p>{"Have a project in mind? Let's work together to bring your ideas to life."}</p>
                </div>

                <div class="contact-grid">
                    <div
                        class={classes!("contact-info", "reveal-left", revealed.then_some("is-revealed"))}
                        style="transition-delay: 200ms;"
                    >
                        <div class="contact-cards">
                            { for CONTACT_LINES.iter().map(|line| html! {
                                <a key={line.label} href={line.href} class="contact-card">
                                    <p class="note-label">{line.label}</p>
                                    <p class="note-value">{line.value}</p>
                                </a>
                            }) }
                        </div>

                        <div class="contact-socials">
                            <h3>{"Follow Me"}</h3>
                            <div class="social-row">
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
                        </div>
                    </div>

                    <div
                        class={classes!("contact-form-wrap", "reveal-right", revealed.then_some("is-revealed"))}
                        style="transition-delay: 400ms;"
                    >
                        if *submitted {
                            <div class="form-success" role="status">
                                <h3>{"Message Sent!"}</h3>
                                <p>{"Thank you for reaching out. I'll get back to you soon."}</p>
                            </div>
                        } else {
                            <form class="contact-form" onsubmit={onsubmit}>
                                <div class="form-row">
                                    <label for="contact-name">{"Your Name"}</label>
                                    <input
                                        id="contact-name"
                                        type="text"
                                        required={true}
                                        value={draft.name.clone()}
                                        oninput={on_name}
                                    />
                                </div>
                                <div class="form-row">
                                    <label for="contact-email">{"Your Email"}</label>
                                    <input
                                        id="contact-email"
                                        type="email"
                                        required={true}
                                        value={draft.email.clone()}
                                        oninput={on_email}
                                    />
                                </div>
                                <div class="form-row">
                                    <label for="contact-message">{"Your Message"}</label>
                                    <textarea
                                        id="contact-message"
                                        rows="5"
                                        required={true}
                                        value={draft.message.clone()}
                                        oninput={on_message}
                                    />
                                </div>
                                <button type="submit" class="button-primary" disabled={*submitting}>
                                    { if *submitting { "Sending..." } else { "Send Message" } }
                                </button>
                            </form>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
