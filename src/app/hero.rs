use leptos::{html, prelude::*};
use leptos_use::{
    use_mouse_in_element, use_timeout_fn, UseMouseInElementReturn, UseTimeoutFnReturn,
};

use crate::{section::Section, tracking::PointerOffset};

use super::page::scroll_to_section;

const PARTICLE_COUNT: usize = 60;
const GOLDEN: f64 = 0.618_033_988_749_895;

pub(super) struct Particle {
    pub top: f64,
    pub left: f64,
    size: f64,
    depth: f64,
    pub duration: f64,
    delay: f64,
    class: &'static str,
}

/// Quasi-random but deterministic, so the server and the browser render the
/// same field.
pub(super) fn particle(i: usize) -> Particle {
    let f = |k: f64| ((i as f64 + 1.0) * GOLDEN * k).fract();
    Particle {
        top: f(1.0) * 100.0,
        left: f(3.7) * 100.0,
        size: 1.0 + f(5.3) * 4.0,
        depth: f(7.1),
        duration: 5.0 + f(11.9) * 20.0,
        delay: f(13.3) * 5.0,
        class: match i % 3 {
            0 => "bg-neon-purple/30",
            1 => "bg-neon-blue/30",
            _ => "bg-white/20",
        },
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let hero_ref = NodeRef::<html::Section>::new();
    let UseMouseInElementReturn {
        element_x,
        element_y,
        element_width,
        element_height,
        ..
    } = use_mouse_in_element(hero_ref);
    let pointer = Memo::new(move |_| {
        PointerOffset::within(
            element_x.get(),
            element_y.get(),
            element_width.get(),
            element_height.get(),
        )
    });

    // entrance animation starts a beat after mount
    let (entered, set_entered) = signal(false);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(move |_: ()| set_entered(true), 100.0);
    Effect::new(move |_| start(()));

    let particles = (0..PARTICLE_COUNT)
        .map(|i| {
            let p = particle(i);
            view! {
                <div
                    class=format!("absolute rounded-full animate-float {}", p.class)
                    style=move || {
                        format!(
                            "top: {:.2}%; left: {:.2}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.1}s; animation-delay: {:.1}s; transform: {}",
                            p.top,
                            p.left,
                            p.size,
                            p.size,
                            p.duration,
                            p.delay,
                            pointer.get().translate_css(-20.0 * p.depth),
                        )
                    }
                ></div>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Home.id()
            node_ref=hero_ref
            class="relative min-h-screen flex flex-col justify-center items-center py-20 overflow-hidden"
            style=move || {
                let (x, y) = pointer.get().parallax(20.0);
                format!("--mouse-x: {x:.2}; --mouse-y: {y:.2}")
            }
        >
            <div
                class="absolute inset-0 flex items-center justify-center transition-transform duration-100"
                style:transform=move || pointer.get().translate_css(-10.0)
            >
                <div class="absolute inset-0 bg-hero-glow opacity-70 animate-pulse-glow"></div>
            </div>
            <div
                class="absolute inset-0 bg-grid transition-transform duration-200"
                style:transform=move || pointer.get().translate_css(-5.0)
            >
                <div class="absolute inset-0 bg-gradient-radial from-transparent to-black/30"></div>
            </div>

            <div class="particle-container absolute inset-0 pointer-events-none">{particles}</div>

            <div
                class="container relative z-10 text-center hero-stagger"
                class:entered=move || entered.get()
            >
                <h1 class="font-display font-bold text-4xl md:text-5xl lg:text-7xl mb-6 tracking-tight">
                    <span class="block">
                        "Hi, I'm " <span class="text-gradient animate-text-shimmer">"Hamza"</span>
                    </span>
                    <span class="block text-gradient mt-1">"Crafting Digital Masterpieces"</span>
                </h1>
                <p class="max-w-xl mx-auto text-gray-300 text-lg md:text-xl mb-10">
                    "I'm a fullstack developer specializing in building exceptional digital experiences that blend creativity with technical excellence."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <button
                        class="bg-gradient-to-r from-neon-purple to-neon-blue text-white px-8 py-4 rounded-md hover:shadow-neon-glow transition-all duration-300 hover:scale-105"
                        on:click=move |_| {
                            scroll_to_section(Section::About);
                        }
                    >
                        "View my work"
                    </button>
                </div>
            </div>

            <a
                href=Section::About.href()
                class="absolute bottom-4 left-1/2 -translate-x-1/2 flex flex-col items-center text-sm text-gray-400 hover:text-white transition-colors"
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section(Section::About);
                }
            >
                <span class="mb-2">"Scroll to explore"</span>
                <span class="animate-bounce" aria-hidden="true">"⌄"</span>
            </a>

            <div
                class="absolute top-10 left-10 w-20 h-20 border-t-2 border-l-2 border-neon-purple/30 opacity-40 transition-transform duration-300"
                style:transform=move || pointer.get().translate_css(10.0)
            ></div>
            <div
                class="absolute bottom-10 right-10 w-20 h-20 border-b-2 border-r-2 border-neon-blue/30 opacity-40 transition-transform duration-300"
                style:transform=move || pointer.get().translate_css(10.0)
            ></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particles_are_deterministic_and_in_bounds() {
        for i in 0..PARTICLE_COUNT {
            let (a, b) = (particle(i), particle(i));
            assert_eq!(a.top, b.top);
            assert!((0.0..100.0).contains(&a.left));
            assert!((1.0..5.0).contains(&a.size));
            assert!((0.0..1.0).contains(&a.depth));
        }
    }
}
