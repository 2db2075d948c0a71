pub mod badge_handler;
pub mod book_club_handler;
pub mod book_handler;
pub mod health_handler;
pub mod notification_handler;
pub mod quiz_handler;
pub mod recommendation_handler;
pub mod stats_handler;

use actix_web::web;

/// Registers every route. Literal paths under `/api/books` go in before the
/// `{id}` patterns so `search` and `covers` are never captured as ids.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        // books
        .service(book_handler::search_books)
        .service(book_handler::search_covers)
        .service(book_handler::list_books)
        .service(book_handler::create_book)
        .service(book_handler::get_book)
        .service(book_handler::update_book)
        .service(book_handler::delete_book)
        .service(book_handler::generate_summary)
        .service(book_handler::external_books_search)
        // quizzes
        .service(quiz_handler::generate_quiz)
        .service(quiz_handler::latest_quiz_for_book)
        .service(quiz_handler::get_quiz)
        .service(quiz_handler::submit_quiz)
        .service(quiz_handler::quiz_stats)
        // gamification surface
        .service(stats_handler::get_user_stats)
        .service(badge_handler::list_badges)
        .service(badge_handler::badge_tiers)
        .service(notification_handler::list_notifications)
        .service(notification_handler::unread_count)
        .service(notification_handler::mark_read)
        .service(notification_handler::mark_all_read)
        // recommendations
        .service(recommendation_handler::list_recommendations)
        .service(recommendation_handler::generate_recommendations)
        // book clubs
        .service(book_club_handler::list_book_clubs)
        .service(book_club_handler::create_book_club)
        .service(book_club_handler::join_book_club)
        .service(book_club_handler::get_book_club)
        .service(book_club_handler::leave_book_club)
        .service(book_club_handler::set_current_book)
        .service(book_club_handler::list_members)
        .service(book_club_handler::list_messages)
        .service(book_club_handler::post_message);
}
