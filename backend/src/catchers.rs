use rocket::{catch, Request};
use rocket_dyn_templates::{context, Template};

#[catch(404)]
pub fn not_found(req: &Request) -> Template {
    Template::render("not-found", context! { uri: req.uri().to_string() })
}

#[catch(500)]
pub fn internal_error(req: &Request) -> Template {
    Template::render("error", context! { uri: req.uri().to_string() })
}
