use yew::prelude::*;

use crate::frontend::hooks::use_reveal;

const PROJECTS_REVEAL_THRESHOLD: f64 = 0.1;
const CARD_STAGGER_MS: u32 = 150;
const CARD_BASE_DELAY_MS: u32 = 300;

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    live_url: Option<&'static str>,
    github_url: Option<&'static str>,
    featured: bool,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Go Yachting Dubai",
        description: "Luxury yacht booking platform with multilingual support, real-time \
                      availability, and seamless reservation system for premium maritime \
                      experiences.",
        image: "/project-yachting.PNG",
        tags: &["React", "Node.js", "MongoDB", "i18n"],
        live_url: Some("https://www.goyachtingdubai.com"),
        github_url: None,
        featured: true,
    },
    Project {
        title: "Cosmos Care Medical",
        description: "Healthcare management system with appointment booking, patient records, \
                      and integrated medical services portal.",
        image: "/project-medical.PNG",
        tags: &["Next.js", "TypeScript", "PostgreSQL", "Tailwind"],
        live_url: Some("https://www.cosmoscaremedicalcenter.com"),
        github_url: None,
        featured: true,
    },
    Project {
        title: "Mart Management System",
        description: "Comprehensive inventory and sales management solution with real-time \
                      tracking, analytics dashboard, and automated reporting.",
        image: "/project-mart.jpg",
        tags: &["C#", ".NET", "SQL Server", "Bootstrap"],
        live_url: None,
        github_url: Some("https://github.com/Clash786"),
        featured: false,
    },
    Project {
        title: "Library Management",
        description: "Digital library system with catalog management, borrowing tracking, and \
                      user authentication for educational institutions.",
        image: "/project-library.jpg",
        tags: &["Java", "MySQL", "Spring Boot", "JSP"],
        live_url: None,
        github_url: Some("https://github.com/Clash786"),
        featured: false,
    },
];

fn project_card(project: &Project, index: usize, revealed: bool) -> Html {
    let delay = index as u32 * CARD_STAGGER_MS + CARD_BASE_DELAY_MS;

    html! {
        <div
            key={project.title}
            class={classes!(
                "project-card",
                "reveal-up",
                project.featured.then_some("is-featured"),
                revealed.then_some("is-revealed"),
            )}
            style={format!("transition-delay: {delay}ms;")}
        >
            <div class="project-media">
                <img src={project.image} alt={project.title} loading="lazy" />
            </div>
            <div class="project-body">
                <div class="project-tags">
                    { for project.tags.iter().map(|tag| html! {
                        <span key={*tag} class="tag">{*tag}</span>
                    }) }
                </div>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-links">
                    if let Some(live_url) = project.live_url {
                        <a
                            href={live_url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="project-link is-live"
                        >
                            {"Live Demo"}
                        </a>
                    }
                    if let Some(github_url) = project.github_url {
                        <a
                            href={github_url}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="project-link"
                        >
                            {"Code"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let section = use_node_ref();
    let revealed = use_reveal(section.clone(), PROJECTS_REVEAL_THRESHOLD);

    html! {
        <section id="projects" ref={section} class="projects-section">
            <div class="section-inner">
                <div class={classes!("section-header", "reveal-up", revealed.then_some("is-revealed"))}>
                    <span class="badge">{"Portfolio"}</span>
                    <h2>{"Featured "}<span class="text-gradient">{"Projects"}</span></h2>
                    <p>
                        {"A selection of my recent work, showcasing real-world applications \
                          built with modern technologies"}
                    </p>
                </div>

                <div class="projects-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| {
                        project_card(project, index, revealed)
                    }) }
                </div>

                <div
                    class={classes!("projects-more", "reveal-up", revealed.then_some("is-revealed"))}
                    style="transition-delay: 900ms;"
                >
                    <a
                        href="https://github.com/Clash786"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button-outline"
                    >
                        {"View More on GitHub"}
                    </a>
                </div>
            </div>
        </section>
    }
}
