use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::frontend::hooks::use_reveal;

const EXPERIENCE_REVEAL_THRESHOLD: f64 = 0.1;
const ITEM_STAGGER_MS: u32 = 150;
const ITEM_BASE_DELAY_MS: u32 = 300;
const LINE_FILL_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Education,
    Work,
    Certification,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Work => "Work",
            Self::Certification => "Certification",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Education => "is-education",
            Self::Work => "is-work",
            Self::Certification => "is-certification",
        }
    }
}

struct TimelineEntry {
    kind: EntryKind,
    title: &'static str,
    organization: &'static str,
    period: &'static str,
    description: &'static str,
}

const TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        kind: EntryKind::Work,
        title: "Website Developer & Modifier",
        organization: "Dubai Client (Freelance)",
        period: "2024 - Present",
        description: "Developing and modifying websites for Dubai-based clients including yacht \
                      booking and medical center platforms",
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "BSCS in Computer Science",
        organization: "FUUAST Islamabad",
        period: "2023 - Present",
        description: "Currently pursuing Bachelor of Science in Computer Science",
    },
    TimelineEntry {
        kind: EntryKind::Work,
        title: "Interlocutor",
        organization: "M&M Institute Islamabad",
        period: "June 2024 - Sep 2024",
        description: "Conducted interviews and assessments for educational programs",
    },
    TimelineEntry {
        kind: EntryKind::Certification,
        title: "Freelancing & Graphic Design",
        organization: "DigiSkills Training Program",
        period: "Jul 2022 - Oct 2022",
        description: "Completed professional training in freelancing and graphic design",
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "Intermediate in ICS",
        organization: "ICB G-6/3 Islamabad",
        period: "2021 - 2022",
        description: "Intermediate in Computer Science",
    },
    TimelineEntry {
        kind: EntryKind::Education,
        title: "Matric in Computer Science",
        organization: "IMCB I-8/3 Islamabad",
        period: "2019 - 2020",
        description: "Secondary education with computer science focus",
    },
];

fn timeline_card(entry: &TimelineEntry, index: usize, revealed: bool) -> Html {
    let delay = index as u32 * ITEM_STAGGER_MS + ITEM_BASE_DELAY_MS;
    let side = if index % 2 == 0 { "is-left" } else { "is-right" };

    html! {
        <div
            key={entry.title}
            class={classes!("timeline-card", "reveal-up", side, revealed.then_some("is-revealed"))}
            style={format!("transition-delay: {delay}ms;")}
        >
            <div class="card-body">
                <span class={classes!("kind-badge", entry.kind.class())}>{entry.kind.label()}</span>
                <h3>{entry.title}</h3>
                <p class="organization">{entry.organization}</p>
                <p class="period">{entry.period}</p>
                <p class="description">{entry.description}</p>
            </div>
            <div class="timeline-dot" aria-hidden="true" />
        </div>
    }
}

#[function_component(Experience)]
pub fn experience() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), EXPERIENCE_REVEAL_THRESHOLD);
    let line_filled = use_state(|| false);

    // The center line's gradient fill starts shortly after the section
    // reveals; the CSS transition does the actual sweep.
    {
        let line_filled = line_filled.clone();
        use_effect_with(revealed, move |&revealed| {
            let timer = revealed.then(|| {
                Timeout::new(LINE_FILL_DELAY_MS, move || line_filled.set(true))
            });
            move || drop(timer)
        });
    }

    html! {
        <section id="experience" ref={section} class="experience-section">
            <div class="section-inner">
                <div class={classes!("section-header", "reveal-up", revealed.then_some("is-revealed"))}>
                    <span class="badge">{"Journey"}</span>
                    <h2>{"Experience & "}<span class="text-gradient">{"Education"}</span></h2>
                    <p>{"My professional journey and educational background that shaped my career"}</p>
                </div>

                <div class="timeline">
                    <div class="timeline-track" aria-hidden="true">
                        <div
                            class="timeline-fill"
                            style={if *line_filled { "height: 100%;" } else { "height: 0%;" }}
                        />
                    </div>

                    { for TIMELINE.iter().enumerate().map(|(index, entry)| {
                        timeline_card(entry, index, revealed)
                    }) }
                </div>
            </div>
        </section>
    }
}
