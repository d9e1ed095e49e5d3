use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Terms() -> impl IntoView {
    view! {
        <Title text="Terms of Service \u{2014} Vimpound AI" />
        <div class="pt-32 pb-24 px-6 max-w-3xl mx-auto space-y-6">
            <h1 class="text-4xl font-bold text-white">"Terms of Service"</h1>
            <p class="text-sm text-slate-500">"Last updated: January 2026"</p>

            <p class="text-slate-400 leading-relaxed">
                "These terms govern your use of Vimpound AI. By creating a workspace or \
                 using the service you agree to them. If you are accepting on behalf of a \
                 company, you confirm you have the authority to do so."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"Use of the Service"</h2>
            <p class="text-slate-400 leading-relaxed">
                "You may use Vimpound AI only in compliance with applicable law. You are \
                 responsible for the content you submit and for keeping your account \
                 credentials confidential. Don't resell access, probe the service for \
                 vulnerabilities without permission, or use it to build a competing dataset."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"Your Content"</h2>
            <p class="text-slate-400 leading-relaxed">
                "You keep ownership of everything you create in your workspace. We only \
                 process your content to operate the service, and never to train models."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"Termination"</h2>
            <p class="text-slate-400 leading-relaxed">
                "You can stop using the service and delete your workspace at any time. We \
                 may suspend accounts that violate these terms, with notice where practical."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"Changes"</h2>
            <p class="text-slate-400 leading-relaxed">
                "We may update these terms as the service evolves. Material changes will be \
                 announced ahead of time; continued use after the effective date counts as \
                 acceptance."
            </p>
        </div>
    }
}
