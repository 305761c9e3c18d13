use leptos::{html, prelude::*};

use crate::{
    section::Section,
    tracking::keyframes::{PROJECTS_OFFSET, PROJECTS_OPACITY},
};

use super::reveal::{use_scroll_fade, Reveal};

struct Project {
    title: &'static str,
    category: &'static str,
    description: &'static str,
    image: &'static str,
    link: &'static str,
    technologies: &'static [&'static str],
}

static PROJECTS: [Project; 4] = [
    Project {
        title: "Furniro E Commerce Platform",
        category: "Web Application",
        description: "An online furniture store with modern design, real-time cart updates, and Sanity CMS integration for dynamic content.",
        image: "https://images.unsplash.com/photo-1664455340023-214c33a9d0bd?q=80&w=1932&auto=format&fit=crop",
        link: "https://marketplace-hackathon-ecommerce-project.vercel.app/",
        technologies: &["Nextjs", "TypeScript", "Tailwind CSS", "Sanity CMS", "Stripe"],
    },
    Project {
        title: "AI Chatbot Assistant",
        category: "AI Integration",
        description: "An Agentic AI Chatbot using Streamlit, FastAPI and OpenAI API, GrokAPI",
        image: "https://plus.unsplash.com/premium_photo-1683121710572-7723bd2e235d?q=80&w=1932&auto=format&fit=crop",
        link: "https://github.com/HamzaaAftab/ai-chatbot-with-streamlit-fastAPI-langGraph",
        technologies: &["Python", "OpenAI API", "FastAPI", "Streamlit", "Grok"],
    },
    Project {
        title: "Music School Platform",
        category: "Next.js Project",
        description: "A Comprehensive and Innovative UI Design for a Music School Platform",
        image: "https://music-school-hamza.vercel.app/",
        link: "#",
        technologies: &["Next.js", "Tailwind CSS", "Animated", "TypeScript", "Aeternity UI"],
    },
    Project {
        title: "AI Powered Code Reviewer",
        category: "MERN Stack Project",
        description: "MERN Stack Based AI Code Reviewer to help out developers in their coding journey.",
        image: "https://plus.unsplash.com/premium_photo-1683121718643-fb18d2668d53?q=80&w=1932&auto=format&fit=crop",
        link: "https://github.com/HamzaaAftab/ai-code-reviewer-mern-geminiAPI",
        technologies: &["MERN Stack", "OpenAI", "Gemini"],
    },
];

const CARD_TECH_LIMIT: usize = 3;
const ALL_PROJECTS_URL: &str = "https://github.com/HamzaaAftab?tab=repositories";

/// Moves `step` slots from `current` in a ring of `len`.
fn wrap_index(current: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current as isize + step).rem_euclid(len as isize) as usize
}

/// The first `limit` technologies and how many were left out.
fn tech_summary(
    technologies: &'static [&'static str],
    limit: usize,
) -> (&'static [&'static str], Option<usize>) {
    if technologies.len() > limit {
        (&technologies[..limit], Some(technologies.len() - limit))
    } else {
        (technologies, None)
    }
}

fn tech_tag(tech: &'static str) -> impl IntoView {
    view! { <span class="text-xs bg-white/10 px-2 py-1 rounded-full">{tech}</span> }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let fade = use_scroll_fade(section_ref, PROJECTS_OPACITY, PROJECTS_OFFSET);

    view! {
        <section
            id=Section::Projects.id()
            node_ref=section_ref
            class="py-24 relative"
            style=move || fade.get()
        >
            <div class="absolute top-1/2 right-0 -translate-y-1/2 w-80 h-80 bg-neon-purple/10 rounded-full blur-[120px] animate-pulse-glow"></div>
            <div class="absolute bottom-1/4 left-1/4 w-60 h-60 bg-neon-blue/10 rounded-full blur-[100px] animate-pulse-slow"></div>
            <div class="absolute inset-0 opacity-10 bg-dot-pattern"></div>

            <div class="container">
                <Reveal class="text-center max-w-3xl mx-auto mb-14">
                    <span class="inline-block rounded-full border border-white/10 bg-white/5 text-gray-300 mb-6 px-4 py-1.5 text-xs">
                        "My work"
                    </span>
                    <h2 class="font-display text-3xl md:text-4xl font-bold mb-4 tracking-tight">
                        "Featured " <span class="text-gradient">"Projects"</span>
                    </h2>
                    <p class="text-gray-300">
                        "A selection of my recent work, showcasing my skills and passion for creating exceptional digital experiences."
                    </p>
                </Reveal>

                <ProjectCarousel />
                <ProjectShowcase />

                <Reveal class="flex justify-center mt-16" delay_ms=500>
                    <a
                        href=ALL_PROJECTS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="border border-white/10 hover:bg-white/5 px-8 py-4 rounded-md relative overflow-hidden group flex items-center"
                    >
                        "View all projects"
                        <span class="ml-1 transition-transform duration-300 group-hover:translate-x-1">"›"</span>
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

/// Mobile layout: one card at a time with wrapping previous/next.
#[component]
fn ProjectCarousel() -> impl IntoView {
    let (current, set_current) = signal(0usize);
    let step = move |by: isize| set_current.update(|i| *i = wrap_index(*i, by, PROJECTS.len()));

    view! {
        <div class="block lg:hidden mb-10 relative">
            {move || {
                let project = &PROJECTS[current.get()];
                let (shown, hidden) = tech_summary(project.technologies, CARD_TECH_LIMIT);
                view! {
                    <div class="glass-panel overflow-hidden animate-fade-in">
                        <div
                            class="h-48 w-full bg-cover bg-center"
                            style=format!("background-image: url({})", project.image)
                        ></div>
                        <div class="p-5">
                            <span class="inline-block mb-2 text-xs bg-white/10 px-2 py-1 rounded-md">
                                {project.category}
                            </span>
                            <h3 class="font-display font-semibold text-xl mb-2">{project.title}</h3>
                            <p class="text-sm text-gray-300 mb-4">{project.description}</p>
                            <div class="flex flex-wrap gap-2 mb-4">
                                {shown.iter().copied().map(tech_tag).collect_view()}
                                {hidden
                                    .map(|n| {
                                        view! {
                                            <span class="text-xs bg-white/5 px-2 py-1 rounded-full">
                                                {format!("+{n}")}
                                            </span>
                                        }
                                    })}
                            </div>
                            <a
                                href=project.link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="block w-full text-center bg-white text-black rounded-md py-2"
                            >
                                "View Project"
                            </a>
                        </div>
                    </div>
                }
            }}
            <button
                class="absolute left-2 top-24 bg-black/50 hover:bg-black/70 border border-white/10 rounded-full w-8 h-8"
                aria-label="Previous project"
                on:click=move |_| step(-1)
            >
                "‹"
            </button>
            <button
                class="absolute right-2 top-24 bg-black/50 hover:bg-black/70 border border-white/10 rounded-full w-8 h-8"
                aria-label="Next project"
                on:click=move |_| step(1)
            >
                "›"
            </button>
        </div>
    }
}

/// Desktop layout: selectable list beside a detail panel for the active
/// project.
#[component]
fn ProjectShowcase() -> impl IntoView {
    let (active, set_active) = signal(0usize);
    let (show_details, set_show_details) = signal(false);

    view! {
        <div class="hidden lg:grid grid-cols-12 gap-8">
            <div class="col-span-5 flex flex-col justify-center">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        let is_active = move || active.get() == index;
                        view! {
                            <Reveal delay_ms=((index as u32 + 1) * 100)>
                                <div
                                    class=move || {
                                        if is_active() {
                                            "cursor-pointer py-6 px-6 border-l-2 transition-all duration-500 relative hover:translate-x-1 border-neon-purple bg-white/5"
                                        } else {
                                            "cursor-pointer py-6 px-6 border-l-2 transition-all duration-500 relative hover:translate-x-1 border-white/10"
                                        }
                                    }
                                    on:click=move |_| set_active(index)
                                >
                                    <span class=move || {
                                        if is_active() {
                                            "inline-block mb-2 text-xs px-2 py-1 rounded-md transition-all duration-300 bg-white/10"
                                        } else {
                                            "inline-block mb-2 text-xs px-2 py-1 rounded-md transition-all duration-300 bg-transparent"
                                        }
                                    }>
                                        {project.category}
                                    </span>
                                    <h3
                                        class="font-display font-semibold text-xl mb-1 transition-all duration-300"
                                        class:text-white=is_active
                                        class:text-gray-400=move || !is_active()
                                    >
                                        {project.title}
                                    </h3>
                                    <p
                                        class="text-sm transition-all duration-300"
                                        class:text-gray-300=is_active
                                        class:text-gray-500=move || !is_active()
                                    >
                                        {project.description}
                                    </p>
                                    <Show when=is_active>
                                        <span class="absolute right-4 top-1/2 -translate-y-1/2 text-neon-purple animate-fade-in">
                                            "›"
                                        </span>
                                    </Show>
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>

            <Reveal class="col-span-7" delay_ms=200>
                <div class="sticky top-32">
                    <div class="relative group perspective">
                        <div class="absolute -inset-2.5 bg-gradient-to-r from-neon-purple to-neon-blue rounded-lg opacity-20 blur-lg group-hover:opacity-30 transition-opacity duration-300"></div>
                        <div class="glass-panel relative overflow-hidden h-[400px] lg:h-[500px]">
                            {move || {
                                let project = &PROJECTS[active.get()];
                                view! {
                                    <div class="h-full animate-fade-in">
                                        <div class="absolute inset-0 bg-gradient-to-br from-neon-purple/10 via-transparent to-neon-blue/10"></div>
                                        <div
                                            class="h-full w-full bg-cover bg-center transition-transform duration-[10000ms] group-hover:scale-105"
                                            style=format!("background-image: url({})", project.image)
                                        ></div>
                                        <div class="absolute inset-0 bg-black/30 flex items-end">
                                            <div class="p-8 w-full">
                                                <h4 class="font-display text-2xl font-bold mb-2">{project.title}</h4>
                                                <p class="text-gray-200 mb-4">{project.description}</p>
                                                <div class="flex flex-wrap gap-2 mb-4">
                                                    {project.technologies.iter().copied().map(tech_tag).collect_view()}
                                                </div>
                                                <div class="flex gap-3">
                                                    <button
                                                        class="bg-white/10 hover:bg-white/20 backdrop-blur-sm rounded-md px-4 py-2 flex items-center"
                                                        on:click=move |_| set_show_details.update(|s| *s = !*s)
                                                    >
                                                        {move || if show_details.get() { "Hide details" } else { "View details" }}
                                                        <span
                                                            class="ml-1 inline-block transition-transform duration-300"
                                                            class:rotate-180=move || show_details.get()
                                                        >
                                                            "⌄"
                                                        </span>
                                                    </button>
                                                    <a
                                                        href=project.link
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="bg-gradient-to-r from-neon-purple to-neon-blue text-white rounded-md px-4 py-2 flex items-center"
                                                    >
                                                        "Visit project"
                                                        <span class="ml-1">"↗"</span>
                                                    </a>
                                                </div>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }}
                        </div>
                    </div>
                </div>
            </Reveal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_both_ways() {
        let len = PROJECTS.len();
        assert_eq!(wrap_index(0, -1, len), len - 1);
        assert_eq!(wrap_index(len - 1, 1, len), 0);
        assert_eq!(wrap_index(1, 1, len), 2);
        assert_eq!(wrap_index(3, 0, 0), 0);
    }

    #[test]
    fn test_tech_summary_counts_overflow() {
        let (shown, hidden) = tech_summary(PROJECTS[0].technologies, CARD_TECH_LIMIT);
        assert_eq!(shown, ["Nextjs", "TypeScript", "Tailwind CSS"]);
        assert_eq!(hidden, Some(2));

        let (shown, hidden) = tech_summary(PROJECTS[3].technologies, CARD_TECH_LIMIT);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, None);
    }
}
