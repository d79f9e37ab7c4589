//! Scroll-reveal bookkeeping. Elements of a group start hidden and get the
//! revealed class the first time at least 10% of them is in view.

/// Fraction of the element that has to be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";
pub const REVEALED_CLASS: &str = "animate-in";
/// Attribute carrying the position of an element's group in the observed list.
pub const GROUP_ATTRIBUTE: &str = "data-reveal-group";
/// Attribute carrying an element's position within its group.
pub const INDEX_ATTRIBUTE: &str = "data-reveal-index";

/// Inline properties written on reveal for `TransitionDelay` groups.
pub const REVEALED_INLINE_STYLES: &[(&str, &str)] =
    &[("opacity", "1"), ("transform", "translateY(0)")];

/// How the per-element stagger is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerStyle {
    /// `animation-delay`, hidden state comes from the stylesheet.
    AnimationDelay,
    /// Inline hidden state plus a delayed `transition`.
    TransitionDelay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealGroup {
    pub selector: &'static str,
    pub step_ms: u32,
    pub stagger: StaggerStyle,
}

pub const FEATURE_CARDS: RevealGroup = RevealGroup {
    selector: ".feature-card",
    step_ms: 100,
    stagger: StaggerStyle::AnimationDelay,
};

pub const SUPPORT_OPTIONS: RevealGroup = RevealGroup {
    selector: ".support-option",
    step_ms: 150,
    stagger: StaggerStyle::AnimationDelay,
};

pub const DEMO_CARDS: RevealGroup = RevealGroup {
    selector: ".demo-card",
    step_ms: 100,
    stagger: StaggerStyle::TransitionDelay,
};

impl RevealGroup {
    /// CSS time for the element at `index`, e.g. `"0.3s"`.
    pub fn delay(&self, index: usize) -> String {
        let ms = self.step_ms as usize * index;
        format!("{}s", ms as f64 / 1000.0)
    }

    /// Inline style properties applied before the element is observed.
    pub fn initial_styles(&self, index: usize) -> Vec<(&'static str, String)> {
        let delay = self.delay(index);
        match self.stagger {
            StaggerStyle::AnimationDelay => vec![("animation-delay", delay)],
            StaggerStyle::TransitionDelay => vec![
                ("opacity", "0".to_string()),
                ("transform", "translateY(30px)".to_string()),
                (
                    "transition",
                    format!("opacity 0.6s ease {}, transform 0.6s ease {}", delay, delay),
                ),
            ],
        }
    }
}

/// One-way reveal state for the elements of a group.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Feeds one visibility change. Returns `true` when this crossing reveals
    /// the element; leaving the viewport never hides it again.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(revealed) if intersecting && !*revealed => {
                *revealed = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

/// Keyframes run by the revealed class of the stylesheet-driven groups.
pub const REVEAL_KEYFRAMES: &str = "revealUp";

/// Stylesheet for the hidden and revealed states of the stylesheet-driven groups.
pub fn reveal_css(groups: &[RevealGroup]) -> String {
    let animated = groups
        .iter()
        .filter(|group| group.stagger == StaggerStyle::AnimationDelay)
        .map(|group| {
            format!(
                "{sel} {{ opacity: 0; transform: translateY(30px); }}\n\
                 {sel}.{class} {{ animation: {name} 0.6s ease both; }}\n",
                sel = group.selector,
                class = REVEALED_CLASS,
                name = REVEAL_KEYFRAMES
            )
        })
        .collect::<String>();
    let keyframes = (!animated.is_empty()).then(|| {
        format!(
            "@keyframes {} {{ from {{ opacity: 0; transform: translateY(30px); }} \
             to {{ opacity: 1; transform: translateY(0); }} }}\n",
            REVEAL_KEYFRAMES
        )
    });
    let transition_overrides = groups
        .iter()
        .filter(|group| group.stagger == StaggerStyle::TransitionDelay)
        .map(|group| {
            format!(
                "{}.{} {{ opacity: 1 !important; transform: translateY(0) !important; }}\n",
                group.selector, REVEALED_CLASS
            )
        });
    keyframes
        .into_iter()
        .chain(std::iter::once(animated))
        .chain(transition_overrides)
        .collect()
}
