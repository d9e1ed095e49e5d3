use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn PrivacyPolicy() -> impl IntoView {
    view! {
        <Title text="Privacy Policy \u{2014} Vimpound AI" />
        <div class="pt-32 pb-24 px-6 max-w-3xl mx-auto space-y-6">
            <h1 class="text-4xl font-bold text-white">"Privacy Policy"</h1>
            <p class="text-sm text-slate-500">"Last updated: January 2026"</p>

            <p class="text-slate-400 leading-relaxed">
                "This policy describes what Vimpound AI collects, why, and what we do with \
                 it. The short version: we collect the minimum needed to run the service, \
                 and your content is never training data."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"What We Collect"</h2>
            <p class="text-slate-400 leading-relaxed">
                "Account details you give us (name, email), the content you put in your \
                 workspace, and basic usage data such as feature activity and crash reports. \
                 We do not buy or enrich data about you from third parties."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"How We Use It"</h2>
            <p class="text-slate-400 leading-relaxed">
                "To provide and secure the service, to respond when you contact us, and to \
                 understand which features matter in aggregate. We don't sell personal data \
                 and we don't share it with advertisers."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"Retention and Deletion"</h2>
            <p class="text-slate-400 leading-relaxed">
                "Workspace content stays until you delete it or close your account, after \
                 which it is removed from production systems within 30 days and from \
                 backups on their rotation schedule."
            </p>

            <h2 class="text-2xl font-bold text-white pt-4">"Contact"</h2>
            <p class="text-slate-400 leading-relaxed">
                "Questions about this policy are welcome through the contact link in the \
                 footer."
            </p>
        </div>
    }
}
