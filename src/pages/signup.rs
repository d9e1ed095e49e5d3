use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Signup() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    let on_submit = move |_| {
        let address = email.get();
        if address.trim().is_empty() {
            return;
        }
        log::debug!("sign-up requested for {address}");
        set_submitted.set(true);
    };

    view! {
        <Title text="Sign Up \u{2014} Vimpound AI" />
        <div class="pt-32 pb-24 px-6 max-w-md mx-auto">
            <div class="bg-slate-900/50 border border-slate-800 rounded-2xl p-8">
                {move || {
                    if submitted.get() {
                        view! {
                            <div class="text-center space-y-4">
                                <h1 class="text-2xl font-bold text-white">"You're on the list."</h1>
                                <p class="text-slate-400">
                                    "We'll reach out to " <span class="text-white">{email.get()}</span>
                                    " as soon as your workspace is ready."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="space-y-6">
                                <div class="text-center space-y-2">
                                    <h1 class="text-2xl font-bold text-white">"Create your workspace"</h1>
                                    <p class="text-slate-400 text-sm">
                                        "Early access is rolling out in waves. Leave your email and grab a spot."
                                    </p>
                                </div>
                                <input
                                    type="email"
                                    placeholder="you@company.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="w-full px-4 py-3 bg-slate-950 border border-slate-800 rounded-lg text-white placeholder-slate-600 focus:outline-none focus:border-indigo-500 transition-colors"
                                />
                                <button
                                    on:click=on_submit
                                    class="w-full px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors"
                                >
                                    "Request Access"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
