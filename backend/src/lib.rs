pub mod catchers;
pub mod error;
pub mod routes;
pub mod store;

pub use shared::{CourseIdea, Identity};

use rocket::fs::{relative, FileServer};
use rocket::{catchers, routes, Build, Rocket};
use rocket_dyn_templates::Template;

use crate::catchers::{internal_error, not_found};
use crate::routes::{
    cast_vote, create_idea, idea_detail, index, list_ideas, sign_in, vote_from_detail, AppState,
};

/// Assemble the application. The binary launches this; tests mount it with a
/// local client.
pub fn build() -> Rocket<Build> {
    // Anchor templates to the crate directory so the app resolves them no
    // matter where the process was started from.
    let figment = rocket::Config::figment().merge(("template_dir", relative!("templates")));

    rocket::custom(figment)
        .attach(Template::fairing())
        .manage(AppState::new())
        .mount(
            "/",
            routes![
                index,
                sign_in,
                list_ideas,
                create_idea,
                cast_vote,
                idea_detail,
                vote_from_detail
            ],
        )
        .mount("/", FileServer::from(relative!("static")))
        .register("/", catchers![not_found, internal_error])
}
