//! Navigation destinations and the action seam behind interactive chrome.
//!
//! Controls in the navbar and footer don't talk to the router or the
//! browser directly. They describe what should happen as an [`Action`] and
//! run it against a pair of injected capabilities, so the wiring stays
//! testable without a real router or a registered mail client.

pub mod routes {
    pub const HOME: &str = "/";
    pub const SIGNUP: &str = "/signup";
    pub const TERMS: &str = "/terms";
    pub const PRIVACY_POLICY: &str = "/privacy-policy";
}

/// Recipient for the "Contact Us" mail handoff.
pub const CONTACT_ADDRESS: &str = "michaelhiggins8@gmail.com";

pub fn mail_href(address: &str) -> String {
    format!("mailto:{address}")
}

/// What activating a control does. Navigation goes to the client-side
/// router; mail hands off to whatever mail client the platform registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Navigate(&'static str),
    Mail(&'static str),
}

impl Action {
    /// Fire-and-forget: failures belong to the router or the OS, not to us.
    pub fn run(self, navigate: &impl Fn(&str), open_mail: &impl Fn(&str)) {
        match self {
            Action::Navigate(path) => {
                log::debug!("navigate: {path}");
                navigate(path);
            }
            Action::Mail(address) => {
                log::debug!("mail handoff: {address}");
                open_mail(&mail_href(address));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn run_recorded(action: Action) -> (Vec<String>, Vec<String>) {
        let navigations = RefCell::new(Vec::new());
        let handoffs = RefCell::new(Vec::new());
        action.run(
            &|path| navigations.borrow_mut().push(path.to_string()),
            &|href| handoffs.borrow_mut().push(href.to_string()),
        );
        (navigations.into_inner(), handoffs.into_inner())
    }

    #[test]
    fn navigate_calls_router_once_with_path() {
        let (navigations, handoffs) = run_recorded(Action::Navigate(routes::SIGNUP));
        assert_eq!(navigations, ["/signup"]);
        assert!(handoffs.is_empty());
    }

    #[test]
    fn mail_hands_off_once_with_mailto_href() {
        let (navigations, handoffs) = run_recorded(Action::Mail(CONTACT_ADDRESS));
        assert!(navigations.is_empty());
        assert_eq!(handoffs, ["mailto:michaelhiggins8@gmail.com"]);
    }

    #[test]
    fn route_paths_are_stable() {
        assert_eq!(routes::HOME, "/");
        assert_eq!(routes::SIGNUP, "/signup");
        assert_eq!(routes::TERMS, "/terms");
        assert_eq!(routes::PRIVACY_POLICY, "/privacy-policy");
    }

    #[test]
    fn mail_href_uses_mailto_scheme() {
        assert_eq!(mail_href("a@b.dev"), "mailto:a@b.dev");
    }
}
