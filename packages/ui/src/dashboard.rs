//! Static overview page.

use dioxus::prelude::*;

use crate::components::Card;
use crate::icons::{FaDatabase, FaScrewdriverWrench, FaUpload};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Upload,
    Database,
    Tools,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub icon: StatIcon,
}

pub const STATS: [Stat; 3] = [
    Stat {
        title: "Files Processed",
        value: "50",
        description: "Last 30 days",
        icon: StatIcon::Upload,
    },
    Stat {
        title: "Data Points",
        value: "1,000",
        description: "Total enriched entries",
        icon: StatIcon::Database,
    },
    Stat {
        title: "Active Tools",
        value: "3",
        description: "Scraping & Enhancement",
        icon: StatIcon::Tools,
    },
];

#[component]
pub fn StatsCard(stat: Stat) -> Element {
    let icon = match stat.icon {
        StatIcon::Upload => rsx! { Icon { icon: FaUpload, width: 24, height: 24 } },
        StatIcon::Database => rsx! { Icon { icon: FaDatabase, width: 24, height: 24 } },
        StatIcon::Tools => rsx! { Icon { icon: FaScrewdriverWrench, width: 24, height: 24 } },
    };

    rsx! {
        Card {
            class: "stats-card",
            div {
                class: "stats-card-body",
                div {
                    p { class: "stats-title", "{stat.title}" }
                    p { class: "stats-value", "{stat.value}" }
                    p { class: "stats-description", "{stat.description}" }
                }
                div { class: "stats-icon", {icon} }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "dashboard",
            h1 { class: "page-title", "Dashboard" }
            div {
                class: "stats-grid",
                for stat in STATS {
                    StatsCard { key: "{stat.title}", stat }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_are_fixed() {
        let values: Vec<_> = STATS.iter().map(|s| (s.title, s.value)).collect();
        assert_eq!(
            values,
            vec![
                ("Files Processed", "50"),
                ("Data Points", "1,000"),
                ("Active Tools", "3"),
            ]
        );
    }
}
