//! DOM-free page state: the one-shot reveal latch, scroll-derived navigation
//! state, the stat counter ramp, and the contact form draft. Everything here
//! compiles on the host target so it can be tested without a browser.

/// Section ids in document order, matching the `#home`-style anchor links.
pub const SECTION_IDS: [&str; 5] = ["home", "projects", "about", "experience", "contact"];

/// The nav bar switches to its compact treatment past this scroll offset.
pub const COMPACT_NAV_THRESHOLD_PX: f64 = 100.0;

/// Probe distance below the viewport top used when picking the active section.
pub const ACTIVE_SECTION_PROBE_PX: f64 = 200.0;

/// Counter ramp duration.
pub const COUNTER_RAMP_MS: f64 = 2000.0;

/// Artificial pacing before the contact form hands off to the mail client.
pub const SUBMIT_PACING_MS: u32 = 500;

/// How long the "message sent" state stays up before self-clearing.
pub const SUBMITTED_RESET_MS: u32 = 5000;

/// Recipient for the contact form's mailto deep link.
pub const CONTACT_EMAIL: &str = "umairanjum7866@gmail.com";

/// One-shot visibility latch backing a section's reveal state.
///
/// Flips false→true on the first intersecting event and ignores everything
/// after that, so the observer can be disconnected as soon as `observe`
/// returns true.
#[derive(Clone, Copy, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection event. Returns true exactly once: on the first
    /// event where the element is intersecting.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// True iff the page has scrolled past the compact-nav threshold. No
/// hysteresis: exactly 100 is still the tall bar.
pub fn is_compact_nav(scroll_y: f64) -> bool {
    scroll_y > COMPACT_NAV_THRESHOLD_PX
}

/// Picks the active section from `(id, offset_top)` pairs in document order.
///
/// Scans in reverse so the section the user most recently scrolled into wins
/// over earlier ones that also start above the probe line. Falls back to the
/// first section when nothing qualifies.
pub fn active_section<'a>(section_tops: &[(&'a str, f64)], scroll_y: f64) -> &'a str {
    let probe = scroll_y + ACTIVE_SECTION_PROBE_PX;

    for (id, top) in section_tops.iter().rev() {
        if *top <= probe {
            return id;
        }
    }

    section_tops.first().map(|(id, _)| *id).unwrap_or("home")
}

/// Displayed counter value after `elapsed_ms` of a cubic ease-out ramp from
/// 0 to `target`. Clamped to `target` once the ramp window has passed.
pub fn counter_value(target: u32, elapsed_ms: f64) -> u32 {
    let progress = (elapsed_ms / COUNTER_RAMP_MS).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - progress).powi(3);
    (f64::from(target) * eased).floor() as u32
}

/// Mobile menu state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// The three contact form fields, as typed so far.
#[derive(Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// All three fields are required before a submit is accepted.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Mail-client deep link carrying the draft. Delivery is delegated to
    /// whatever mail client handles `mailto:`; there is no confirmation path.
    pub fn mailto_href(&self) -> String {
        let subject = encode_component(&format!("Portfolio Contact from {}", self.name));
        let body = encode_component(&format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        ));
        format!("mailto:{CONTACT_EMAIL}?subject={subject}&body={body}")
    }
}

/// Percent-encodes with the same escape set as JavaScript's
/// `encodeURIComponent` (unreserved: alphanumerics and `- _ . ! ~ * ' ( )`),
/// so the generated link matches what a browser would have produced.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(char::from_digit(u32::from(byte >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit(u32::from(byte & 0x0f), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_latch_fires_exactly_once() {
        let mut latch = RevealLatch::new();

        assert!(!latch.observe(false), "non-intersecting events never fire");
        assert!(latch.observe(true));

        // Further events, intersecting or not, never fire again.
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
    }

    #[test]
    fn compact_nav_boundary_is_exact() {
        assert!(!is_compact_nav(0.0));
        assert!(!is_compact_nav(100.0));
        assert!(is_compact_nav(101.0));
        assert!(is_compact_nav(100.5));
    }

    fn sample_tops() -> Vec<(&'static str, f64)> {
        vec![
            ("home", 0.0),
            ("projects", 900.0),
            ("about", 2100.0),
            ("experience", 3000.0),
            ("contact", 3900.0),
        ]
    }

    #[test]
    fn active_section_defaults_to_home_at_top() {
        assert_eq!(active_section(&sample_tops(), 0.0), "home");
    }

    #[test]
    fn active_section_picks_last_section_above_probe() {
        let tops = sample_tops();

        // probe = scroll + 200
        assert_eq!(active_section(&tops, 650.0), "home");
        assert_eq!(active_section(&tops, 700.0), "projects");
        assert_eq!(active_section(&tops, 1900.0), "about");
        assert_eq!(active_section(&tops, 5000.0), "contact");
    }

    #[test]
    fn active_section_reverse_scan_breaks_ties_toward_later_sections() {
        // Two sections starting at the same offset: the later one wins.
        let tops = [("home", 0.0), ("projects", 500.0), ("about", 500.0)];
        assert_eq!(active_section(&tops, 400.0), "about");
    }

    #[test]
    fn counter_value_endpoints() {
        assert_eq!(counter_value(15, 0.0), 0);
        assert_eq!(counter_value(15, 2000.0), 15);
        assert_eq!(counter_value(15, 2500.0), 15);
        assert_eq!(counter_value(0, 1000.0), 0);
    }

    #[test]
    fn counter_value_is_non_decreasing() {
        let mut previous = 0;
        let mut t = 0.0;

        while t <= 2200.0 {
            let value = counter_value(24, t);
            assert!(value >= previous, "counter went backwards at t={t}");
            assert!(value <= 24);
            previous = value;
            t += 16.0;
        }

        assert_eq!(previous, 24);
    }

    #[test]
    fn menu_state_toggles_and_closes() {
        let menu = MenuState::Closed;
        assert!(!menu.is_open());

        let menu = menu.toggled();
        assert!(menu.is_open());

        // Re-toggle and explicit close both land on Closed.
        assert_eq!(menu.toggled(), MenuState::Closed);
        assert_eq!(MenuState::Open.toggled(), MenuState::Closed);
    }

    #[test]
    fn draft_requires_all_three_fields() {
        let mut draft = ContactDraft::default();
        assert!(!draft.is_complete());

        draft.name = "A B".into();
        draft.email = "a@b.com".into();
        assert!(!draft.is_complete());

        draft.message = "   ".into();
        assert!(!draft.is_complete(), "whitespace-only message must not pass");

        draft.message = "hi there".into();
        assert!(draft.is_complete());
    }

    #[test]
    fn mailto_href_encodes_fields_into_template() {
        let draft = ContactDraft {
            name: "A B".into(),
            email: "a@b.com".into(),
            message: "hi there".into(),
        };

        let href = draft.mailto_href();

        assert_eq!(
            href,
            "mailto:umairanjum7866@gmail.com\
             ?subject=Portfolio%20Contact%20from%20A%20B\
             &body=Name%3A%20A%20B%0AEmail%3A%20a%40b.com%0A%0AMessage%3A%0Ahi%20there"
        );
    }

    #[test]
    fn encode_component_matches_encode_uri_component_set() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("a b"), "a%20b");
        assert_eq!(encode_component("x@y/z?"), "x%40y%2Fz%3F");
        // Multi-byte UTF-8 is encoded per byte.
        assert_eq!(encode_component("é"), "%C3%A9");
    }
}
