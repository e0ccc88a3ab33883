//! Static landing-page copy.
//!
//! The promotional text shown around the demo, carried as typed constant
//! data so the view layer only renders. Nothing here is persisted or
//! mutated.

/// A feature card on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

/// One numbered step in the "how it works" section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HowItWorksStep {
    pub title: &'static str,
    pub text: &'static str,
}

pub const APP_NAME: &str = "FocusFuel";
pub const TAGLINE: &str = "Energy-aware productivity for busy professionals";

pub const HERO_HEADLINE: &str = "Work with your energy — not against it.";
pub const HERO_SUBHEADLINE: &str = "FocusFuel learns your daily energy rhythm and builds a smart \
timetable so you do creative, high-value work when you're naturally at your best.";
pub const HERO_QUOTE: &str = "FocusFuel isn't just another planner or to-do list app. It helps \
you manage your energy, not just your time.";

pub const FEATURES_INTRO: &str = "Built for busy professionals (25–45) with jam-packed schedules. \
FocusFuel helps you protect your mental energy, do your best work in less time, and reclaim \
evenings for life outside work.";

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Energy-first scheduling",
        text: "Log how you feel (high / medium / low). FocusFuel learns your rhythm and \
schedules your top work during peaks.",
    },
    Feature {
        title: "Smart timetable",
        text: "Automatic blocks for deep work, shallow work, and breaks, optimized for your \
peak energy windows.",
    },
    Feature {
        title: "Easy logging",
        text: "Quick tap to mark energy level. No long questionnaires. Start improving from \
day one.",
    },
];

pub const HOW_IT_WORKS: [HowItWorksStep; 3] = [
    HowItWorksStep {
        title: "Log energy",
        text: "Tap high / medium / low a few times a day. FocusFuel learns patterns quickly.",
    },
    HowItWorksStep {
        title: "Pattern detection",
        text: "The app recognizes when you're most productive and surfaces high-energy slots.",
    },
    HowItWorksStep {
        title: "Smart timetable",
        text: "Get a prioritized schedule that assigns big tasks to peak energy windows and \
easy tasks to low-energy periods.",
    },
];

pub const DEMO_TITLE: &str = "Try the FocusFuel demo";
pub const DEMO_INTRO: &str = "Log your energy for a few time slots and see a sample smart \
timetable generated instantly.";
pub const DEMO_LOGGER_HINT: &str = "Tap a slot and choose High / Medium / Low.";
pub const DEMO_SCHEDULE_HINT: &str = "FocusFuel assigns priority tasks to your high-energy slots.";
pub const DEMO_EMPTY_SCHEDULE: &str = "No data yet — log energy on the left to see suggestions.";
pub const DEMO_FOOTNOTE: &str = "This interactive demo shows the core idea: match task type to \
your energy. In the real app we use smarter models and more data.";

pub const CTA_HEADLINE: &str = "Ready to work with your energy?";
pub const CTA_TEXT: &str = "Get personalized schedules that match your peak energy. Join \
professionals who get more done and feel better doing it.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_are_nonempty() {
        assert_eq!(FEATURES.len(), 3);
        assert_eq!(HOW_IT_WORKS.len(), 3);
        for feature in FEATURES {
            assert!(!feature.title.is_empty());
            assert!(!feature.text.is_empty());
        }
    }
}
