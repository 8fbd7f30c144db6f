use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::{get, post, uri, FromForm, Responder, State};
use rocket_dyn_templates::{context, Template};
use serde::Serialize;
use tracing::{debug, info, instrument};

use shared::{CourseIdea, Identity};

use crate::error::AppError;
use crate::store::{IdeaDao, MemoryIdeaDao};

const SIGN_IN_PROMPT: &str = "Whoops! Please sign in to view ideas.";
const VOTE_THANKS: &str = "Thanks for your vote!";
const VOTE_REPEAT: &str = "You already voted";

pub struct AppState {
    pub ideas: Box<dyn IdeaDao>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ideas: Box::new(MemoryIdeaDao::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(FromForm)]
pub struct SignInForm<'r> {
    username: &'r str,
}

#[derive(FromForm)]
pub struct NewIdeaForm<'r> {
    title: &'r str,
}

/// Template-facing shape of an idea. Handlebars cannot call methods, so the
/// vote count and a sorted voter list are materialized here.
#[derive(Serialize)]
struct IdeaView {
    title: String,
    creator: String,
    slug: String,
    vote_count: usize,
    voters: Vec<String>,
}

impl From<CourseIdea> for IdeaView {
    fn from(idea: CourseIdea) -> Self {
        let mut voters: Vec<String> = idea.voters().into_iter().collect();
        voters.sort();
        Self {
            title: idea.title().to_string(),
            creator: idea.creator().to_string(),
            slug: idea.slug().to_string(),
            vote_count: idea.vote_count(),
            voters,
        }
    }
}

#[derive(Responder)]
pub enum AppResponse {
    Page(Template),
    Redirect(Redirect),
    Flash(Flash<Redirect>),
}

/// Unsigned visitors get bounced to the home page with a sign-in prompt.
fn sign_in_bounce() -> AppResponse {
    AppResponse::Flash(Flash::error(Redirect::found(uri!(index)), SIGN_IN_PROMPT))
}

#[get("/")]
pub fn index(user: Option<Identity>, flash: Option<FlashMessage<'_>>) -> Template {
    Template::render(
        "index",
        context! {
            username: user.map(|u| u.name),
            flash_message: flash.map(|f| f.message().to_string()),
        },
    )
}

#[post("/sign-in", data = "<form>")]
pub fn sign_in(form: Form<SignInForm<'_>>, jar: &CookieJar<'_>) -> Redirect {
    // Whatever name the form carries becomes the identity, empty included.
    jar.add((Identity::COOKIE, form.username.to_string()));
    debug!(username = form.username, "identity cookie set");
    Redirect::found(uri!(index))
}

#[get("/ideas")]
pub fn list_ideas(
    user: Option<Identity>,
    flash: Option<FlashMessage<'_>>,
    state: &State<AppState>,
) -> Result<AppResponse, AppError> {
    let Some(user) = user else {
        return Ok(sign_in_bounce());
    };

    let ideas: Vec<IdeaView> = state
        .ideas
        .find_all()?
        .into_iter()
        .map(IdeaView::from)
        .collect();

    Ok(AppResponse::Page(Template::render(
        "ideas",
        context! {
            username: user.name,
            flash_message: flash.map(|f| f.message().to_string()),
            ideas,
        },
    )))
}

#[instrument(skip(state, form))]
#[post("/ideas", data = "<form>")]
pub fn create_idea(
    form: Form<NewIdeaForm<'_>>,
    user: Option<Identity>,
    state: &State<AppState>,
) -> Result<AppResponse, AppError> {
    let Some(user) = user else {
        return Ok(sign_in_bounce());
    };

    let idea = CourseIdea::new(form.title, &user.name);
    info!(slug = %idea.slug(), creator = %user.name, "idea submitted");
    state.ideas.add(idea)?;

    Ok(AppResponse::Redirect(Redirect::found(uri!(list_ideas))))
}

#[instrument(skip(state))]
#[post("/ideas/<slug>/vote")]
pub fn cast_vote(
    slug: &str,
    user: Option<Identity>,
    state: &State<AppState>,
) -> Result<AppResponse, AppError> {
    let Some(user) = user else {
        return Ok(sign_in_bounce());
    };

    let added = state.ideas.add_voter(slug, &user.name)?;
    let message = if added { VOTE_THANKS } else { VOTE_REPEAT };
    debug!(slug, voter = %user.name, added, "vote recorded");

    Ok(AppResponse::Flash(Flash::success(
        Redirect::found(uri!(list_ideas)),
        message,
    )))
}

#[get("/ideas/<slug>")]
pub fn idea_detail(slug: &str, state: &State<AppState>) -> Result<Template, AppError> {
    let idea = state.ideas.find_by_slug(slug)?;
    Ok(Template::render(
        "detail",
        context! { idea: IdeaView::from(idea) },
    ))
}

#[instrument(skip(state))]
#[post("/ideas/<slug>")]
pub fn vote_from_detail(
    slug: &str,
    user: Option<Identity>,
    state: &State<AppState>,
) -> Result<AppResponse, AppError> {
    let Some(user) = user else {
        return Ok(sign_in_bounce());
    };

    state.ideas.add_voter(slug, &user.name)?;

    // TODO: substitute the actual slug here. The literal ":slug" segment
    // matches no route, so this redirect lands on the 404 page.
    Ok(AppResponse::Redirect(Redirect::found("/ideas/:slug/vote")))
}
