//! Static page copy for the portfolio sections.

pub struct SectionContent {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub items: &'static [&'static str],
}

pub fn section_content(id: &str) -> Option<SectionContent> {
    let content = match id {
        "home" => SectionContent {
            heading: "Hi, I'm Octavio",
            tagline: "Software engineer building fast, friendly interfaces.",
            items: &[
                "Frontend and systems work, from layout engines to CLIs.",
                "Scroll down or use the navigation bar to explore.",
            ],
        },
        "about" => SectionContent {
            heading: "About",
            tagline: "A few words about how I work.",
            items: &[
                "I care about small details: motion, spacing, response time.",
                "I like owning features end to end, from design review to release.",
                "Outside of work: climbing, film photography and long walks.",
            ],
        },
        "experience" => SectionContent {
            heading: "Experience",
            tagline: "Where I have shipped things.",
            items: &[
                "Frontend Engineer: design system, component library, docs site.",
                "Full-stack Developer: dashboards and reporting for logistics teams.",
                "Freelance: landing pages and storefronts for small businesses.",
            ],
        },
        "projects" => SectionContent {
            heading: "Projects",
            tagline: "Selected work.",
            items: &[
                "Trailhead: offline-first hiking route planner.",
                "Ledgerly: shared expense tracker with instant settle-up.",
                "Glyph: a tiny markdown notes app with full-text search.",
                "This portfolio, with scroll-tracked navigation.",
            ],
        },
        "skills" => SectionContent {
            heading: "Skills",
            tagline: "Tools I reach for.",
            items: &[
                "Languages: Rust, TypeScript, JavaScript, SQL.",
                "Frontend: React, Next.js, Tailwind CSS, egui.",
                "Tooling: Git, Docker, CI pipelines, profiling.",
            ],
        },
        "contact" => SectionContent {
            heading: "Contact",
            tagline: "Let's build something together.",
            items: &["Email: hello@example.com", "Or use the form on the web version of this page."],
        },
        _ => return None,
    };
    Some(content)
}
