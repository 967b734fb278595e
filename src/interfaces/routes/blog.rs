use actix_web::web;

use crate::handlers::blog_posts;

/// Blog routes address posts by slug, not id.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("")
                    .route(web::get().to(blog_posts::list_blog_posts))
                    .route(web::post().to(blog_posts::create_blog_post)),
            )
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(blog_posts::get_blog_post))
                    .route(web::patch().to(blog_posts::update_blog_post))
                    .route(web::delete().to(blog_posts::delete_blog_post)),
            ),
    );
}
