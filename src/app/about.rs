use leptos::{html, prelude::*};
use leptos_use::{use_mouse_in_element, UseMouseInElementReturn};

use crate::{
    section::Section,
    tracking::{
        keyframes::{SECTION_OFFSET, SECTION_OPACITY},
        CardTilt, PointerOffset,
    },
};

use super::{
    hero::particle,
    reveal::{use_scroll_fade, Reveal},
};

const MAX_TILT_DEG: f64 = 10.0;

#[component]
pub fn AboutSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let fade = use_scroll_fade(section_ref, SECTION_OPACITY, SECTION_OFFSET);

    view! {
        <section
            id=Section::About.id()
            node_ref=section_ref
            class="py-24 relative"
            style=move || fade.get()
        >
            <div class="absolute top-0 right-0 -translate-y-1/2 w-72 h-72 bg-neon-purple/20 rounded-full blur-[100px] opacity-50 animate-pulse-glow"></div>
            <div class="absolute bottom-0 left-0 translate-y-1/2 w-60 h-60 bg-neon-blue/20 rounded-full blur-[120px] opacity-40 animate-pulse-slow"></div>

            <div class="particle-container absolute inset-0">
                {(0..15)
                    .map(|i| {
                        let p = particle(i + 100);
                        view! {
                            <div
                                class="absolute w-1 h-1 rounded-full bg-white/10 animate-float"
                                style=format!(
                                    "top: {:.2}%; left: {:.2}%; animation-duration: {:.1}s",
                                    p.top,
                                    p.left,
                                    p.duration + 5.0,
                                )
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="container">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 lg:gap-20 items-center">
                    <Reveal class="order-2 lg:order-1" delay_ms=200>
                        <span class="inline-block rounded-full border border-white/10 bg-white/5 text-gray-300 mb-6 px-4 py-1.5 text-xs">
                            "About me"
                        </span>
                        <h2 class="font-display text-3xl md:text-4xl font-bold mb-6 tracking-tight">
                            "Hi, I'm " <span class="text-gradient">"Hamza"</span>
                        </h2>
                        <div class="space-y-4 text-gray-300">
                            <Reveal delay_ms=300>
                                <p>
                                    "I'm a passionate developer focused on creating elegant solutions to complex problems. With a background in both design and development, I bring a unique perspective to every project."
                                </p>
                            </Reveal>
                            <Reveal delay_ms=400>
                                <p>
                                    "My work is centered around the belief that great technology should feel invisible, enhancing the user's experience without getting in the way. I specialize in React, TypeScript, and Node.js, with a strong focus on performance and accessibility."
                                </p>
                            </Reveal>
                            <Reveal delay_ms=500>
                                <p>
                                    "When I'm not coding, you'll find me exploring new technologies, contributing to open-source projects, or sharing knowledge through technical writing and mentoring."
                                </p>
                            </Reveal>
                        </div>
                    </Reveal>

                    <Reveal class="order-1 lg:order-2 flex justify-center" delay_ms=300>
                        <TiltCard />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// Portrait card that leans toward the pointer and settles flat when it
/// leaves.
#[component]
fn TiltCard() -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        is_outside,
        ..
    } = use_mouse_in_element(card_ref);

    let pointer = Memo::new(move |_| {
        if is_outside.get() {
            PointerOffset::default()
        } else {
            PointerOffset::within(
                element_x.get(),
                element_y.get(),
                element_width.get(),
                element_height.get(),
            )
        }
    });
    let tilt = move || CardTilt::from_offset(pointer.get(), MAX_TILT_DEG);

    view! {
        <div class="relative max-w-md w-full h-[400px] perspective" node_ref=card_ref>
            <div class="absolute -inset-2.5 bg-gradient-to-r from-neon-purple to-neon-blue rounded-lg opacity-20 blur-lg animate-pulse-glow"></div>
            <div
                class="glass-panel relative overflow-hidden h-full w-full group transform-style-3d"
                style:transform=move || tilt().transform_css()
                style:transition="transform 0.1s ease-out"
            >
                <div class="absolute inset-0 bg-gradient-to-br from-neon-purple/20 via-transparent to-neon-blue/10"></div>
                <div
                    class="h-full w-full bg-cover bg-center transition-transform duration-[10000ms] group-hover:scale-110"
                    style="background-image: url('/portrait.png')"
                ></div>
                <div class="absolute inset-0 bg-black/20 group-hover:bg-black/10 transition-colors duration-500"></div>

                <div class="absolute top-2 left-2 w-5 h-5 border-t-2 border-l-2 border-neon-purple/80 group-hover:w-10 group-hover:h-10 transition-all duration-500"></div>
                <div class="absolute top-2 right-2 w-5 h-5 border-t-2 border-r-2 border-neon-blue/80 group-hover:w-10 group-hover:h-10 transition-all duration-500"></div>
                <div class="absolute bottom-2 left-2 w-5 h-5 border-b-2 border-l-2 border-neon-blue/80 group-hover:w-10 group-hover:h-10 transition-all duration-500"></div>
                <div class="absolute bottom-2 right-2 w-5 h-5 border-b-2 border-r-2 border-neon-purple/80 group-hover:w-10 group-hover:h-10 transition-all duration-500"></div>

                // highlight follows the pointer
                <div
                    class="absolute inset-0 bg-gradient-radial from-white/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 pointer-events-none"
                    style=move || {
                        let p = pointer.get();
                        format!(
                            "background-position: {:.1}% {:.1}%; background-size: 200% 200%",
                            50.0 + p.x * 100.0,
                            50.0 + p.y * 100.0,
                        )
                    }
                ></div>
            </div>

            <div class="absolute -right-10 -top-10 w-20 h-20 border-2 border-dashed border-neon-purple/20 rounded-full animate-spin-slow"></div>
            <div class="absolute -left-5 -bottom-5 w-10 h-10 border border-neon-blue/30 rounded-full animate-pulse-slow"></div>
        </div>
    }
}
