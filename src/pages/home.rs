use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::icons::ChevronRight;
use crate::data::features;
use crate::nav::routes;

#[component]
pub fn Home() -> impl IntoView {
    let feats = features();

    view! {
        <Title text="Vimpound AI" />
        <div class="space-y-24 pb-24">
            // Hero Section
            <section class="pt-32 px-6 text-center relative overflow-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-indigo-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 flex flex-col items-center">
                    <h1 class="text-5xl md:text-7xl font-black text-white tracking-tight mb-6">
                        "Vimpound "
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-indigo-400 to-purple-400">
                            "AI"
                        </span>
                    </h1>

                    <p class="text-xl text-slate-400 max-w-2xl mx-auto mb-8 font-light leading-relaxed">
                        "An AI workspace that drafts, answers, and organizes with you."
                        <br />
                        "Bring your ideas. It handles the busywork."
                    </p>

                    <div class="flex flex-wrap justify-center gap-4 mb-12">
                        <A
                            href=routes::SIGNUP
                            attr:class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors flex items-center"
                        >
                            "Get Started"
                            <ChevronRight class="w-4 h-4 ml-1" />
                        </A>
                    </div>
                </div>
            </section>

            // Features Grid
            <section class="px-6 max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl font-bold text-white mb-4">
                        "Why Vimpound AI?"
                    </h2>
                    <p class="text-slate-400">
                        "Built for people who would rather ship than shuffle tabs."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8">
                    {feats.into_iter().map(|feat| {
                        view! {
                            <div class="bg-slate-900/50 border border-slate-800 p-8 rounded-2xl hover:border-slate-700 transition-colors">
                                <div class="mb-4 bg-slate-800 w-12 h-12 rounded-lg flex items-center justify-center">
                                    {(feat.icon)()}
                                </div>
                                <h3 class="text-xl font-bold text-white mb-2">{feat.title}</h3>
                                <p class="text-slate-400 leading-relaxed">{feat.desc}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
