use leptos::prelude::*;

use crate::section::Section;

use super::page::{scroll_to_section, use_page_tracking};

/// Height of the side track in px.
const TRACK_PX: f64 = 150.0;
const DOT_RADIUS_PX: f64 = 6.0;

/// Thin bar across the top of the viewport, scaled by page progress.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let tracking = use_page_tracking();

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-neon-purple to-neon-blue z-50"
            style:transform-origin="0%"
            style:transform=move || format!("scaleX({:.4})", tracking.progress.get())
        ></div>
    }
}

/// Side track, follower dot and one dot per section. Slides in once the
/// page has scrolled past the indicator threshold.
#[component]
pub fn SectionIndicator() -> impl IntoView {
    let tracking = use_page_tracking();
    let smoothed = tracking.smoothed_progress;

    view! {
        <div class=move || {
            if tracking.show_indicator.get() {
                "fixed right-5 top-1/2 -translate-y-1/2 z-40 transition-all duration-500 ease-out opacity-100 translate-x-0"
            } else {
                "fixed right-5 top-1/2 -translate-y-1/2 z-40 transition-all duration-500 ease-out opacity-0 translate-x-12 pointer-events-none"
            }
        }>
            <div class="flex flex-col gap-4 items-center">
                <div class="h-[150px] w-1 bg-white/10 rounded-full relative overflow-hidden">
                    <div
                        class="absolute top-0 w-1 h-full bg-gradient-to-b from-neon-purple to-neon-blue rounded-full"
                        style:transform-origin="top"
                        style:transform=move || format!("scaleY({:.4})", smoothed.get())
                    ></div>
                    <div
                        class="absolute w-3 h-3 -left-1 bg-neon-purple rounded-full shadow-[0_0_10px_rgba(139,92,246,0.7)]"
                        style:top=move || format!("{:.1}px", smoothed.get() * TRACK_PX - DOT_RADIUS_PX)
                    ></div>
                </div>

                <div class="flex flex-col gap-3">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || tracking.active.get() == section;
                            view! {
                                <button
                                    class="w-3 h-3 rounded-full transition-all duration-300 relative group hover:scale-125"
                                    aria-label=section.label()
                                    on:click=move |_| {
                                        scroll_to_section(section);
                                    }
                                >
                                    <span class=move || {
                                        if is_active() {
                                            "absolute inset-0 rounded-full transition-all duration-500 bg-gradient-to-r from-neon-purple to-neon-blue"
                                        } else {
                                            "absolute inset-0 rounded-full transition-all duration-500 bg-white/20 group-hover:bg-white/40"
                                        }
                                    }></span>
                                    <span class="absolute right-5 top-0 bg-black/80 text-white px-2 py-1 text-xs rounded whitespace-nowrap opacity-0 group-hover:opacity-100 pointer-events-none transition-opacity duration-200">
                                        {section.label()}
                                    </span>
                                    <Show when=is_active>
                                        <span class="absolute inset-0 rounded-full bg-neon-purple/30 animate-pulse-slow blur-sm"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
