use leptos::{either::Either, prelude::*};

use crate::section::Section;

use super::page::{scroll_to_section, use_page_tracking};

const SOCIALS: [&str; 4] = ["Twitter", "GitHub", "LinkedIn", "Dribbble"];

#[component]
pub fn Header() -> impl IntoView {
    let tracking = use_page_tracking();
    let (menu_open, set_menu_open) = signal(false);

    let go_to = move |section: Section| {
        set_menu_open(false);
        scroll_to_section(section);
    };

    view! {
        <header class=move || {
            if tracking.header_solid.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 py-3 bg-black/80 backdrop-blur-md border-b border-white/5"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 py-6"
            }
        }>
            <div class="container flex justify-between items-center">
                <a
                    href=Section::Home.href()
                    class="text-2xl font-display font-semibold group"
                    on:click=move |ev| {
                        ev.prevent_default();
                        go_to(Section::Home);
                    }
                >
                    <span class="text-gradient relative inline-block">"HAMZA"</span>
                </a>

                <nav class="hidden md:flex items-center gap-6">
                    {Section::NAV
                        .into_iter()
                        .map(|section| {
                            let is_active = move || tracking.active.get() == section;
                            view! {
                                <a
                                    href=section.href()
                                    class=move || {
                                        if is_active() {
                                            "text-sm transition-colors duration-300 relative text-white"
                                        } else {
                                            "text-sm transition-colors duration-300 relative text-gray-300"
                                        }
                                    }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        go_to(section);
                                    }
                                >
                                    {section.label()}
                                    <Show when=is_active>
                                        <span class="absolute bottom-0 left-0 w-full h-[2px] bg-neon-purple"></span>
                                    </Show>
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="bg-gradient-to-r from-neon-purple to-neon-blue text-white rounded-md px-4 py-2 flex gap-1 items-center"
                        on:click=move |_| go_to(Section::Contact)
                    >
                        "Get in touch"
                        <span aria-hidden="true">"›"</span>
                    </button>
                </nav>

                <button
                    class="md:hidden text-white p-1 relative z-50"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            Either::Left(view! { <span class="text-2xl">"✕"</span> })
                        } else {
                            Either::Right(view! { <span class="text-2xl">"☰"</span> })
                        }
                    }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden fixed inset-0 z-40 bg-black/95 backdrop-blur-md pt-20">
                    <nav class="container flex flex-col gap-4">
                        {Section::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <a
                                        href=section.href()
                                        class=move || {
                                            if tracking.active.get() == section {
                                                "py-4 pr-4 pl-6 rounded-md transition-all duration-300 text-white bg-white/5 border-l-2 border-neon-purple"
                                            } else {
                                                "py-4 px-4 rounded-md transition-all duration-300 text-gray-300 hover:text-white hover:bg-white/5"
                                            }
                                        }
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            go_to(section);
                                        }
                                    >
                                        {section.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <button
                            class="bg-gradient-to-r from-neon-purple to-neon-blue text-white mt-2 w-full py-6 rounded-md"
                            on:click=move |_| go_to(Section::Contact)
                        >
                            "Get in touch"
                        </button>
                        <div class="mt-8 flex justify-center gap-6 border-t border-white/10 pt-6">
                            {SOCIALS
                                .into_iter()
                                .map(|social| {
                                    view! {
                                        <a href="#" class="text-gray-400 hover:text-white transition-colors">
                                            {social}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </nav>
                </div>
            </Show>
        </header>
    }
}
