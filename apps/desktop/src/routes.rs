use crate::pages::{Login, Register};
use dioxus::prelude::*;
use mfit_registration::Destination;

#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Register {})]
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Register => Self::Register {},
            Destination::Login => Self::Login {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn destinations_resolve_to_their_routes() {
        for destination in [Destination::Register, Destination::Login] {
            assert_eq!(Route::from(destination).to_string(), destination.route());
        }
    }

    #[test]
    fn login_path_parses() {
        assert_eq!(Route::from_str("/login").ok(), Some(Route::Login {}));
    }
}
