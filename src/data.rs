use leptos::prelude::*;

use crate::components::icons::{MessageSquare, Shield, Sparkles, Zap};

pub struct Feature {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: || view! { <Zap class="w-6 h-6 text-yellow-400" /> }.into_any(),
            title: "Instant Drafts",
            desc: "Turn a two-line brief into launch-ready copy, docs, and emails in seconds, in your own voice.",
        },
        Feature {
            icon: || view! { <MessageSquare class="w-6 h-6 text-blue-400" /> }.into_any(),
            title: "Answers in Context",
            desc: "Ask questions about your own notes and documents and get grounded answers with sources.",
        },
        Feature {
            icon: || view! { <Shield class="w-6 h-6 text-green-400" /> }.into_any(),
            title: "Private by Default",
            desc: "Your workspace is never used to train models. What you write stays yours.",
        },
        Feature {
            icon: || view! { <Sparkles class="w-6 h-6 text-purple-400" /> }.into_any(),
            title: "Better Every Week",
            desc: "New skills and model upgrades ship continuously. No migrations, no version juggling.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_have_distinct_titles_and_copy() {
        let feats = features();
        assert_eq!(feats.len(), 4);
        for feat in &feats {
            assert!(!feat.title.is_empty());
            assert!(!feat.desc.is_empty());
        }
        let mut titles: Vec<_> = feats.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 4);
    }
}
