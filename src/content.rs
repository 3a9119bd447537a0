//! Fixed copy and option tables rendered by the page.

use crate::components::icon::IconKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const STEPS: [Step; 4] = [
    Step {
        title: "Upload Image",
        description: "Take a photo or upload an image of the product.",
        icon: IconKind::Upload,
    },
    Step {
        title: "AI Analysis",
        description: "Our AI analyzes the ingredients and nutritional information.",
        icon: IconKind::Search,
    },
    Step {
        title: "Get Results",
        description: "Receive a detailed health analysis of the product.",
        icon: IconKind::Zap,
    },
    Step {
        title: "View Alternatives",
        description: "Explore healthier alternative products.",
        icon: IconKind::ThumbsUp,
    },
];

/// Card title for a step, numbered from 1.
pub fn step_title(index: usize, step: &Step) -> String {
    format!("Step {}: {}", index + 1, step.title)
}

/// A mock analysis row. The values are literal placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: IconKind,
    /// Row background and icon color classes.
    pub row_class: &'static str,
    pub icon_class: &'static str,
}

impl Metric {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

pub const ANALYSIS_METRICS: [Metric; 3] = [
    Metric {
        label: "Ingredients identified",
        value: "12",
        icon: IconKind::Search,
        row_class: "bg-green-50",
        icon_class: "h-6 w-6 text-green-600",
    },
    Metric {
        label: "Nutritional value",
        value: "Moderate",
        icon: IconKind::Zap,
        row_class: "bg-yellow-50",
        icon_class: "h-6 w-6 text-yellow-500",
    },
    Metric {
        label: "Health score",
        value: "7.5/10",
        icon: IconKind::ThumbsUp,
        row_class: "bg-blue-50",
        icon_class: "h-6 w-6 text-blue-500",
    },
];

pub const ALTERNATIVE_COUNT: usize = 3;

pub fn alternative_titles() -> Vec<String> {
    (1..=ALTERNATIVE_COUNT)
        .map(|n| format!("Alternative {}", n))
        .collect()
}

/// (value, label) pairs for the `<select>` fields.
pub type SelectOptions = &'static [(&'static str, &'static str)];

pub const ACTIVITY_LEVELS: SelectOptions = &[
    ("sedentary", "Sedentary (little to no exercise)"),
    ("light", "Lightly active (light exercise 1-3 days/week)"),
    ("moderate", "Moderately active (moderate exercise 3-5 days/week)"),
    ("very", "Very active (hard exercise 6-7 days/week)"),
    ("extra", "Extra active (very hard exercise & physical job)"),
];

pub const DIETARY_PREFERENCES: SelectOptions = &[
    ("omnivore", "Omnivore"),
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("pescatarian", "Pescatarian"),
    ("keto", "Ketogenic"),
    ("paleo", "Paleo"),
    ("mediterranean", "Mediterranean"),
    ("gluten-free", "Gluten-free"),
    ("dairy-free", "Dairy-free"),
];

pub const HEALTH_GOALS: SelectOptions = &[
    ("weight-loss", "Weight Loss"),
    ("muscle-gain", "Muscle Gain"),
    ("maintenance", "Maintain Current Weight"),
    ("heart-health", "Improve Heart Health"),
    ("energy", "Increase Energy Levels"),
    ("overall", "Overall Health Improvement"),
];

pub const LANGUAGES: SelectOptions = &[("en", "English"), ("es", "Español"), ("fr", "Français")];

pub const UNITS: SelectOptions = &[
    ("metric", "Metric (kg, cm)"),
    ("imperial", "Imperial (lb, in)"),
];

pub const DEFAULT_UNITS: &str = "metric";

pub const QUICK_LINKS: [&str; 4] = ["About Us", "Blog", "Contact", "FAQ"];

pub const SOCIAL_LINKS: [(&str, IconKind); 3] = [
    ("Facebook", IconKind::Facebook),
    ("Twitter", IconKind::Twitter),
    ("Instagram", IconKind::Instagram),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_steps_in_fixed_order() {
        let titles: Vec<String> = STEPS
            .iter()
            .enumerate()
            .map(|(i, step)| step_title(i, step))
            .collect();
        assert_eq!(
            titles,
            [
                "Step 1: Upload Image",
                "Step 2: AI Analysis",
                "Step 3: Get Results",
                "Step 4: View Alternatives",
            ]
        );
    }

    #[test]
    fn test_step_icons() {
        let icons: Vec<_> = STEPS.iter().map(|s| s.icon).collect();
        assert_eq!(
            icons,
            [IconKind::Upload, IconKind::Search, IconKind::Zap, IconKind::ThumbsUp]
        );
    }

    #[test]
    fn test_analysis_values_are_literal() {
        let values: Vec<_> = ANALYSIS_METRICS.iter().map(|m| m.value).collect();
        assert_eq!(values, ["12", "Moderate", "7.5/10"]);
        assert_eq!(ANALYSIS_METRICS[0].text(), "Ingredients identified: 12");
        assert_eq!(ANALYSIS_METRICS[2].text(), "Health score: 7.5/10");
    }

    #[test]
    fn test_three_alternatives() {
        assert_eq!(
            alternative_titles(),
            ["Alternative 1", "Alternative 2", "Alternative 3"]
        );
    }

    #[test]
    fn test_default_units_is_an_option() {
        assert!(UNITS.iter().any(|(value, _)| *value == DEFAULT_UNITS));
    }

    #[test]
    fn test_option_values_unique() {
        for options in [ACTIVITY_LEVELS, DIETARY_PREFERENCES, HEALTH_GOALS, LANGUAGES, UNITS] {
            let mut values: Vec<_> = options.iter().map(|(v, _)| *v).collect();
            let len = values.len();
            values.sort_unstable();
            values.dedup();
            assert_eq!(values.len(), len, "duplicate value in {:?}", options);
        }
    }
}
