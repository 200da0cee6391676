//! Note post pages — list, add form, detail view, and edit form.
//!
//! Every handler is a stateless translation between one request and the
//! store: parse, call the database, render a page or redirect. Unknown post
//! ids answer 404; database and template failures answer 500.

use actix_web::{HttpResponse, Responder, web};
use tera::Context;

use crate::AppState;
use crate::models::NotePostForm;

/// GET / — all posts in insertion order
async fn index(data: web::Data<AppState>) -> impl Responder {
    let posts = match data.db.list_posts() {
        Ok(posts) => posts,
        Err(e) => {
            log::error!("Failed to list posts: {}", e);
            return HttpResponse::InternalServerError().body("Database error");
        }
    };

    let mut context = Context::new();
    context.insert("posts", &posts);
    render(&data, "index.html", &context)
}

/// GET /add — empty submission form, no store interaction
async fn add_post_form(data: web::Data<AppState>) -> impl Responder {
    render(&data, "add_post.html", &Context::new())
}

/// POST /add — persist a new post, then back to the index
async fn add_post(data: web::Data<AppState>, form: web::Form<NotePostForm>) -> impl Responder {
    match data.db.create_post(&form.title, &form.content, &form.author) {
        Ok(post) => {
            log::info!("Created post {}", post.id);
            redirect("/")
        }
        Err(e) => {
            log::error!("Failed to create post: {}", e);
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

/// GET /post/{id} — detail page for one post
async fn view_post(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let post_id = path.into_inner();

    match data.db.get_post(post_id) {
        Ok(Some(post)) => {
            let mut context = Context::new();
            context.insert("post", &post);
            render(&data, "view_post.html", &context)
        }
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("Failed to get post {}: {}", post_id, e);
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

/// GET /post/{id}/edit — form pre-filled with the existing fields
async fn edit_post_form(data: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let post_id = path.into_inner();

    match data.db.get_post(post_id) {
        Ok(Some(post)) => {
            let mut context = Context::new();
            context.insert("post", &post);
            render(&data, "edit_post.html", &context)
        }
        Ok(None) => not_found(),
        Err(e) => {
            log::error!("Failed to get post {}: {}", post_id, e);
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

/// POST /post/{id}/edit — overwrite all three fields, then to the detail page
async fn edit_post(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    form: web::Form<NotePostForm>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.db.update_post(post_id, &form.title, &form.content, &form.author) {
        Ok(true) => redirect(&format!("/post/{}", post_id)),
        Ok(false) => not_found(),
        Err(e) => {
            log::error!("Failed to update post {}: {}", post_id, e);
            HttpResponse::InternalServerError().body("Database error")
        }
    }
}

fn render(data: &web::Data<AppState>, template: &str, context: &Context) -> HttpResponse {
    match data.templates.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render {}: {}", template, e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", location.to_string()))
        .finish()
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Post not found</h1>")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/add", web::get().to(add_post_form))
        .route("/add", web::post().to(add_post))
        .route("/post/{id}", web::get().to(view_post))
        .route("/post/{id}/edit", web::get().to(edit_post_form))
        .route("/post/{id}/edit", web::post().to(edit_post));
}
