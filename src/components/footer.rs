use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::nav::{routes, Action, CONTACT_ADDRESS};

pub(crate) const HEADLINE: &str = "Put Vimpound AI to work on your next launch.";
pub(crate) const COPYRIGHT: &str = "\u{00A9} 2026 Vimpound AI. All rights reserved.";

pub(crate) const BEGIN: (&str, Action) = ("Begin", Action::Navigate(routes::SIGNUP));
pub(crate) const LINKS: [(&str, Action); 3] = [
    ("Terms", Action::Navigate(routes::TERMS)),
    ("Privacy Policy", Action::Navigate(routes::PRIVACY_POLICY)),
    ("Contact Us", Action::Mail(CONTACT_ADDRESS)),
];

#[component]
pub fn Footer() -> impl IntoView {
    let navigate = use_navigate();
    let run = move |action: Action| {
        action.run(
            &|path| navigate(path, Default::default()),
            &|href| {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(href);
                }
            },
        )
    };
    let on_begin = {
        let run = run.clone();
        move |_| run(BEGIN.1)
    };

    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-16 mt-auto">
            <div class="max-w-7xl mx-auto px-6 text-center mb-12">
                <h2 class="text-3xl font-bold text-white mb-6">{HEADLINE}</h2>
                <button
                    on:click=on_begin
                    class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors"
                >
                    {BEGIN.0}
                </button>
            </div>
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>{COPYRIGHT}</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    {LINKS.into_iter().map(|(label, action)| {
                        let run = run.clone();
                        view! {
                            <button
                                on:click=move |_| run(action)
                                class="hover:text-white transition-colors"
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn control(label: &str) -> Action {
        if label == BEGIN.0 {
            return BEGIN.1;
        }
        LINKS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, action)| *action)
            .expect("unknown control")
    }

    /// Activate a control against recording capabilities and return
    /// (navigation calls, mail handoffs).
    fn activate(label: &str) -> (Vec<String>, Vec<String>) {
        let navigations = RefCell::new(Vec::new());
        let handoffs = RefCell::new(Vec::new());
        control(label).run(
            &|path| navigations.borrow_mut().push(path.to_string()),
            &|href| handoffs.borrow_mut().push(href.to_string()),
        );
        (navigations.into_inner(), handoffs.into_inner())
    }

    #[test]
    fn has_exactly_one_of_each_control() {
        let labels: Vec<_> = std::iter::once(BEGIN.0)
            .chain(LINKS.iter().map(|(label, _)| *label))
            .collect();
        assert_eq!(labels, ["Begin", "Terms", "Privacy Policy", "Contact Us"]);
    }

    #[test]
    fn begin_requests_signup_navigation_once() {
        let (navigations, handoffs) = activate("Begin");
        assert_eq!(navigations, ["/signup"]);
        assert!(handoffs.is_empty());
    }

    #[test]
    fn terms_navigates_to_terms_once() {
        let (navigations, handoffs) = activate("Terms");
        assert_eq!(navigations, ["/terms"]);
        assert!(handoffs.is_empty());
    }

    #[test]
    fn privacy_policy_navigates_to_privacy_policy_once() {
        let (navigations, handoffs) = activate("Privacy Policy");
        assert_eq!(navigations, ["/privacy-policy"]);
        assert!(handoffs.is_empty());
    }

    #[test]
    fn contact_us_hands_off_to_mail_client_without_navigating() {
        let (navigations, handoffs) = activate("Contact Us");
        assert!(navigations.is_empty());
        assert_eq!(handoffs, ["mailto:michaelhiggins8@gmail.com"]);
    }

    #[test]
    fn copyright_line_names_vimpound_ai() {
        assert!(COPYRIGHT.contains("2026 Vimpound AI"));
    }
}
