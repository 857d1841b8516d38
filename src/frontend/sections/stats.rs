use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::frontend::hooks::{use_reveal, FrameLoop};
use crate::logic::{counter_value, COUNTER_RAMP_MS};

const STATS_REVEAL_THRESHOLD: f64 = 0.2;
const STAT_STAGGER_MS: u32 = 150;

struct Stat {
    glyph: &'static str,
    target: u32,
    suffix: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { glyph: "💼", target: 15, suffix: "+", label: "Projects Completed" },
    Stat { glyph: "👥", target: 10, suffix: "+", label: "Happy Clients" },
    Stat { glyph: "🕐", target: 3, suffix: "+", label: "Years Experience" },
    Stat { glyph: "🎧", target: 24, suffix: "/7", label: "Support Available" },
];

#[derive(Properties, PartialEq)]
struct StatItemProps {
    target: u32,
    suffix: &'static str,
    label: &'static str,
    glyph: &'static str,
    delay_ms: u32,
    revealed: bool,
}

/// One stat card. Once the section reveals, waits its stagger delay and then
/// ramps the displayed value 0→target with an ease-out frame loop.
#[function_component(StatItem)]
fn stat_item(props: &StatItemProps) -> Html {
    let count = use_state(|| 0u32);

    {
        let count = count.clone();
        let target = props.target;
        let delay_ms = props.delay_ms;
        use_effect_with(props.revealed, move |&revealed| {
            // The loop handle is created inside the delay timer, so both
            // share a slot the cleanup can reach.
            let pending: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

            let delay = revealed.then(|| {
                let pending = pending.clone();
                Timeout::new(delay_ms, move || {
                    let started_at = Cell::new(None::<f64>);
                    let count = count.clone();
                    *pending.borrow_mut() = Some(FrameLoop::start(move |timestamp| {
                        let start = started_at.get().unwrap_or(timestamp);
                        started_at.set(Some(start));

                        let elapsed = timestamp - start;
                        count.set(counter_value(target, elapsed));
                        elapsed < COUNTER_RAMP_MS
                    }));
                })
            });

            move || {
                drop(delay);
                pending.borrow_mut().take();
            }
        });
    }

    html! {
        <div
            class={classes!("stat-card", "reveal-up", props.revealed.then_some("is-revealed"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            <div class="stat-glyph" aria-hidden="true">{props.glyph}</div>
            <div class="stat-value">{*count}{props.suffix}</div>
            <p class="stat-label">{props.label}</p>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), STATS_REVEAL_THRESHOLD);

    html! {
        <section ref={section} class="stats-section">
            <div class="section-inner">
                <div class={classes!("section-header", "reveal-up", revealed.then_some("is-revealed"))}>
                    <span class="badge">{"Track Record"}</span>
                    <h2>{"Numbers That "}<span class="text-gradient">{"Speak"}</span></h2>
                </div>

                <div class="stats-grid">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <StatItem
                            key={stat.label}
                            glyph={stat.glyph}
                            target={stat.target}
                            suffix={stat.suffix}
                            label={stat.label}
                            delay_ms={index as u32 * STAT_STAGGER_MS}
                            revealed={revealed}
                        />
                    }) }
                </div>
            </div>
        </section>
    }
}
