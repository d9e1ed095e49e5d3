use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::Sparkles;
use crate::nav::routes;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let is_home = move || pathname() == routes::HOME;

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href=routes::HOME attr:class="flex items-center space-x-2 group">
                    <Sparkles class="w-7 h-7 text-indigo-400 group-hover:scale-110 transition-transform" />
                    <span class="font-bold text-white text-lg tracking-tight">
                        "Vimpound AI"
                    </span>
                </A>

                <nav class="hidden md:flex items-center space-x-8">
                    <A
                        href=routes::HOME
                        attr:class=move || {
                            if is_home() {
                                "text-sm font-medium transition-colors text-white"
                            } else {
                                "text-sm font-medium transition-colors text-slate-400 hover:text-white"
                            }
                        }
                    >
                        "Home"
                    </A>
                    <A
                        href=routes::SIGNUP
                        attr:class="px-4 py-1.5 bg-white text-black text-sm font-bold rounded-full hover:bg-slate-200 transition-colors"
                    >
                        "Sign Up"
                    </A>
                </nav>
            </div>
        </header>
    }
}
