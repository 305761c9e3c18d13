use leptos::prelude::*;

use crate::section::Section;

use super::page::{scroll_to_section, scroll_to_top};

const CONNECT: [&str; 4] = ["Twitter", "GitHub", "LinkedIn", "Dribbble"];
const LINK_CLASS: &str = "text-sm text-gray-400 hover:text-white transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-16 border-t border-white/10">
            <div class="container">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-8 md:mb-0">
                        <h2 class="font-display font-bold text-2xl mb-2">
                            <span class="text-gradient">"PORTFOLIO"</span>
                        </h2>
                        <p class="text-gray-400">"Crafting digital masterpieces since 2023"</p>
                    </div>
                    <div class="flex gap-8">
                        <div>
                            <p class="text-sm font-medium text-white mb-4">"Navigation"</p>
                            <nav class="flex flex-col gap-2">
                                {Section::NAV
                                    .into_iter()
                                    .map(|section| {
                                        view! {
                                            <a
                                                href=section.href()
                                                class=LINK_CLASS
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    scroll_to_section(section);
                                                }
                                            >
                                                {section.label()}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </nav>
                        </div>
                        <div>
                            <p class="text-sm font-medium text-white mb-4">"Connect"</p>
                            <nav class="flex flex-col gap-2">
                                {CONNECT
                                    .into_iter()
                                    .map(|name| view! { <a href="#" class=LINK_CLASS>{name}</a> })
                                    .collect_view()}
                            </nav>
                        </div>
                    </div>
                </div>
                <div class="flex flex-col md:flex-row justify-between items-center mt-12 pt-8 border-t border-white/5">
                    <p class="text-gray-500 text-sm mb-4 md:mb-0">
                        {format!("© {} Portfolio. All rights reserved.", env!("BUILD_YEAR"))}
                    </p>
                    <a
                        href="#"
                        class="flex items-center gap-2 text-sm text-gray-400 hover:text-white transition-colors"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_top();
                        }
                    >
                        "Back to top"
                        <span aria-hidden="true">"⌃"</span>
                    </a>
                </div>
            </div>
        </footer>
    }
}
