use yew::prelude::*;

use crate::frontend::hooks::use_reveal;
use crate::logic::CONTACT_EMAIL;

const ABOUT_REVEAL_THRESHOLD: f64 = 0.1;
const SKILL_STAGGER_MS: u32 = 50;
const SKILL_BASE_DELAY_MS: u32 = 700;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SkillLevel {
    Expert,
    Advanced,
    Intermediate,
}

impl SkillLevel {
    fn class(self) -> &'static str {
        match self {
            Self::Expert => "is-expert",
            Self::Advanced => "is-advanced",
            Self::Intermediate => "is-intermediate",
        }
    }
}

const SKILLS: [(&str, SkillLevel); 16] = [
    ("HTML/CSS", SkillLevel::Expert),
    ("JavaScript", SkillLevel::Expert),
    ("React", SkillLevel::Advanced),
    ("Node.js", SkillLevel::Advanced),
    ("TypeScript", SkillLevel::Advanced),
    ("Tailwind CSS", SkillLevel::Expert),
    ("PHP", SkillLevel::Advanced),
    ("Laravel", SkillLevel::Advanced),
    ("JSON", SkillLevel::Expert),
    ("SEO", SkillLevel::Advanced),
    ("C#", SkillLevel::Intermediate),
    ("Java", SkillLevel::Intermediate),
    ("Python", SkillLevel::Intermediate),
    ("SQL", SkillLevel::Advanced),
    ("Git", SkillLevel::Advanced),
    ("UI/UX", SkillLevel::Advanced),
];

#[function_component(About)]
pub fn about() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), ABOUT_REVEAL_THRESHOLD);

    let reveal_class = |base: &'static str| classes!(base, revealed.then_some("is-revealed"));

    html! {
        <section id="about" ref={section} class="about-section">
            <div class="section-inner about-grid">
                <div class={reveal_class("about-portrait reveal-left")}>
                    <div class="portrait-frame">
                        <img src="/profile-photo.jpg" alt="Umair Anjum" loading="lazy" />
                    </div>
                    <div class="portrait-note">
                        <p class="note-label">{"Location"}</p>
                        <p class="note-value">{"Islamabad, PK"}</p>
                    </div>
                </div>

                <div class="about-copy">
                    <div class={reveal_class("reveal-up")} style="transition-delay: 200ms;">
                        <span class="badge">{"About Me"}</span>
                        <h2>{"Passionate "}<span class="text-gradient">{"Developer"}</span></h2>
                    </div>

                    <div class={reveal_class("about-bio reveal-up")} style="transition-delay: 400ms;">
                        <p>
                            {"I'm a passionate software developer and freelancer based in \
                              Islamabad, Pakistan. With expertise in modern web technologies and \
                              a keen eye for design, I create digital experiences that make an \
                              impact."}
                        </p>
                        <p>
                            {"Currently pursuing my BSCS in Computer Science at FUUAST while \
                              working on exciting projects. I specialize in building scalable web \
                              applications, multilingual systems, and delivering innovative \
                              solutions for clients worldwide."}
                        </p>
                    </div>

                    <div class={reveal_class("about-contact reveal-up")} style="transition-delay: 500ms;">
                        <div class="contact-line">
                            <p class="note-label">{"Email"}</p>
                            <p class="note-value">{CONTACT_EMAIL}</p>
                        </div>
                        <div class="contact-line">
                            <p class="note-label">{"Phone"}</p>
                            <p class="note-value">{"+92 333 1504378"}</p>
                        </div>
                    </div>

                    <div class={reveal_class("about-skills reveal-up")} style="transition-delay: 600ms;">
                        <h3>{"Skills & Technologies"}</h3>
                        <div class="skill-cloud">
                            { for SKILLS.iter().enumerate().map(|(index, (name, level))| {
                                let delay = index as u32 * SKILL_STAGGER_MS + SKILL_BASE_DELAY_MS;
                                html! {
                                    <span
                                        key={*name}
                                        class={classes!(
                                            "skill-chip",
                                            level.class(),
                                            revealed.then_some("is-revealed"),
                                        )}
                                        style={format!("animation-delay: {delay}ms;")}
                                    >
                                        {*name}
                                    </span>
                                }
                            }) }
                        </div>
                    </div>

                    <div class={reveal_class("reveal-up")} style="transition-delay: 800ms;">
                        <a href="/CV.pdf" download="Umair_Anjum_CV.pdf" class="button-primary">
                            {"Download CV"}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
