use serde::{Deserialize, Serialize};

/// Display name asserted by the client through a cookie.
///
/// Whoever sends the cookie owns the name: there is no account model, no
/// verification, and no uniqueness. An empty name is accepted like any
/// other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
}

impl Identity {
    /// Cookie that carries the display name between requests.
    pub const COOKIE: &'static str = "username";
}

// Backend-specific Rocket implementation
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::http::Status;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for Identity {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            match req.cookies().get(Identity::COOKIE) {
                Some(cookie) => Outcome::Success(Identity {
                    name: cookie.value().to_string(),
                }),
                // A missing cookie is a guard miss, not an error, so routes
                // can take Option<Identity> and decide for themselves.
                None => Outcome::Forward(Status::Unauthorized),
            }
        }
    }
}
