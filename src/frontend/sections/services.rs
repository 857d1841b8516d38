use yew::prelude::*;

use crate::frontend::hooks::use_reveal;

const SERVICES_REVEAL_THRESHOLD: f64 = 0.1;
const CARD_STAGGER_MS: u32 = 100;
const CARD_BASE_DELAY_MS: u32 = 200;

struct Service {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
}

const SERVICES: [Service; 6] = [
    Service {
        glyph: "</>",
        title: "Web Development",
        description: "Custom websites and web applications built with modern technologies and \
                      best practices.",
        features: &["Responsive Design", "Performance Optimized", "SEO Friendly", "Clean Code"],
    },
    Service {
        glyph: "🎨",
        title: "UI/UX Design",
        description: "User-centered design that creates intuitive and engaging digital \
                      experiences.",
        features: &["Wireframing", "Prototyping", "User Research", "Design Systems"],
    },
    Service {
        glyph: "🌐",
        title: "Freelance Services",
        description: "Flexible development support tailored to your project needs and timeline.",
        features: &["Quick Turnaround", "Clear Communication", "Regular Updates", "Ongoing Support"],
    },
    Service {
        glyph: "文A",
        title: "Multilingual Systems",
        description: "Global-ready solutions with multi-language support and localization.",
        features: &["i18n Implementation", "RTL Support", "Content Management", "Auto-translation"],
    },
    Service {
        glyph: "🖥",
        title: "Backend Development",
        description: "Robust server-side solutions with secure APIs and database management.",
        features: &["RESTful APIs", "Database Design", "Authentication", "Cloud Deployment"],
    },
    Service {
        glyph: "📱",
        title: "Sub-domain Management",
        description: "Expert handling of sub-domain creation, configuration, and maintenance.",
        features: &["DNS Configuration", "SSL Setup", "Load Balancing", "Monitoring"],
    },
];

fn service_card(service: &Service, index: usize, revealed: bool) -> Html {
    let delay = index as u32 * CARD_STAGGER_MS + CARD_BASE_DELAY_MS;
    let tilt = if index % 2 == 0 { "tilt-left" } else { "tilt-right" };

    html! {
        <div
            key={service.title}
            class={classes!("service-card", "reveal-up", tilt, revealed.then_some("is-revealed"))}
            style={format!("transition-delay: {delay}ms;")}
        >
            <div class="service-glyph" aria-hidden="true">{service.glyph}</div>
            <h3>{service.title}</h3>
            <p>{service.description}</p>
            <ul class="service-features">
                { for service.features.iter().map(|feature| html! {
                    <li key={*feature}>{*feature}</li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), SERVICES_REVEAL_THRESHOLD);

    html! {
        <section id="services" ref={section} class="services-section">
            <div class="section-inner">
                <div class="services-header">
                    <div class={classes!("reveal-left", revealed.then_some("is-revealed"))}>
                        <span class="badge">{"Services"}</span>
                        <h2>{"What I "}<span class="text-gradient">{"Do"}</span></h2>
                    </div>
                    <p
                        class={classes!("services-intro", "reveal-right", revealed.then_some("is-revealed"))}
                        style="transition-delay: 200ms;"
                    >
                        {"I provide comprehensive digital solutions tailored to your needs, from \
                          concept to deployment. Specializing in modern web technologies and \
                          scalable architectures."}
                    </p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        service_card(service, index, revealed)
                    }) }
                </div>
            </div>
        </section>
    }
}
