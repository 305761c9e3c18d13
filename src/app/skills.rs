use leptos::prelude::*;

use crate::section::Section;

use super::{
    hero::particle,
    reveal::{Reveal, RevealMode},
};

struct Skill {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static SKILLS: [Skill; 5] = [
    Skill {
        icon: "⚛️",
        title: "Frontend Development",
        description: "Expertise in React, Next.js, TypeScript, and modern CSS frameworks like Tailwind.",
    },
    Skill {
        icon: "🚀",
        title: "Backend Development",
        description: "Building robust APIs and services using FastAPI, Node.js, Express, and databases.",
    },
    Skill {
        icon: "🤖",
        title: "AI Integration",
        description: "Using AI tools like Langchain, Langgraph to build smart and helpful applications.",
    },
    Skill {
        icon: "🧠",
        title: "Agentic AI",
        description: "Working with AI agents to automate simple tasks and actions.",
    },
    Skill {
        icon: "🛠️",
        title: "Performance Optimization",
        description: "Ensuring applications run smoothly with optimized rendering and efficient algorithms.",
    },
];

const LEVEL_BARS: usize = 5;
const LEVEL_FILLED: usize = 4;
const SYMBOLS: [&str; 7] = ["</", "{...}", "()", "[]", "=>", "&&", "||"];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-24 bg-black/50 relative">
            <div class="absolute inset-0 opacity-30 pointer-events-none bg-arc-pattern"></div>
            <div class="absolute bottom-0 left-0 translate-y-1/2 w-64 h-64 bg-neon-blue/20 rounded-full blur-[100px] opacity-50 animate-pulse-glow"></div>
            <div class="absolute top-1/4 right-1/4 w-40 h-40 bg-neon-purple/20 rounded-full blur-[80px] opacity-30 animate-pulse-slow"></div>

            <div class="container relative z-10">
                <Reveal class="text-center max-w-3xl mx-auto mb-14">
                    <span class="inline-block rounded-full border border-white/10 bg-white/5 text-gray-300 mb-6 px-4 py-1.5 text-xs">
                        "My expertise"
                    </span>
                    <h2 class="font-display text-3xl md:text-4xl font-bold mb-4 tracking-tight">
                        "Skills & " <span class="text-gradient">"Technologies"</span>
                    </h2>
                    <p class="text-gray-300">
                        "I've spent years refining my skills across various technologies, focusing on creating scalable, accessible, and performant applications."
                    </p>
                </Reveal>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| view! { <SkillCard skill=skill index=index /> })
                        .collect_view()}
                </div>

                <div class="absolute inset-0 overflow-hidden pointer-events-none">
                    {SYMBOLS
                        .into_iter()
                        .enumerate()
                        .map(|(i, symbol)| {
                            let p = particle(i + 200);
                            view! {
                                <div
                                    class="absolute text-white/5 font-mono text-xl animate-float"
                                    style=format!(
                                        "top: {:.2}%; left: {:.2}%; animation-delay: {:.1}s",
                                        p.top,
                                        p.left,
                                        i as f64 * 0.5,
                                    )
                                >
                                    {symbol}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="absolute bottom-0 left-0 w-full h-px overflow-hidden">
                <div class="w-full h-full bg-gradient-to-r from-transparent via-neon-purple/50 to-transparent animate-slide-x"></div>
            </div>
        </section>
    }
}

/// Even cards reveal on visibility, odd ones on scroll position, so the grid
/// staggers in on both short and tall viewports.
fn reveal_mode(index: usize) -> RevealMode {
    if index % 2 == 0 {
        RevealMode::Visibility
    } else {
        RevealMode::Scroll
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <Reveal delay_ms=(index as u32 * 100 + 200) mode=reveal_mode(index)>
            <div
                class="glass-panel p-6 hover:shadow-neon-glow transition-all duration-300 thin-border group h-full"
                on:mouseenter=move |_| set_hovered(true)
                on:mouseleave=move |_| set_hovered(false)
            >
                <div class="flex flex-col items-start relative overflow-hidden h-full z-10">
                    <div
                        class="bg-white/5 p-3 rounded-lg mb-4 text-neon-purple transition-transform duration-300"
                        class:scale-110=move || hovered.get()
                    >
                        {skill.icon}
                    </div>
                    <h3 class="font-display font-semibold text-xl mb-2">{skill.title}</h3>
                    <p class="text-gray-400 group-hover:text-gray-300 transition-colors duration-300">
                        {skill.description}
                    </p>

                    <Show when=move || hovered.get()>
                        <div class="absolute bottom-0 right-0 flex gap-1 items-end animate-fade-in">
                            {(0..LEVEL_BARS)
                                .map(|i| {
                                    let fill = if i < LEVEL_FILLED {
                                        "bg-neon-purple"
                                    } else {
                                        "bg-white/20"
                                    };
                                    view! {
                                        <div
                                            class=format!("w-1.5 rounded-full {fill}")
                                            style=format!("height: {}px", 6 + i * 3)
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </Reveal>
    }
}
