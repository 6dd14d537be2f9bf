use axum::{
	Json, Router,
	routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::event;
use crate::registration;
use crate::user;
use gatherly_core::app::App;

async fn get_greeting() -> Json<serde_json::Value> {
	Json(serde_json::json!({ "message": "Event Management API is running." }))
}

pub fn init(state: App) -> Router {
	Router::new()
		.route("/", get(get_greeting))
		.route("/users", post(user::handler::post_user))
		.route("/events", post(event::handler::post_event))
		.route("/events/upcoming", get(event::handler::list_upcoming_events))
		.route("/events/{id}", get(event::handler::get_event))
		.route("/events/{id}/stats", get(event::handler::get_event_stats))
		.route("/events/{id}/register", post(registration::handler::post_register))
		.route(
			"/events/{eventId}/registrations/{userId}",
			delete(registration::handler::delete_registration),
		)
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

// vim: ts=4
