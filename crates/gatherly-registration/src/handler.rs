use axum::{
	Json,
	extract::{Path, State},
	http::StatusCode,
};
use serde::Deserialize;

use crate::coordinator;
use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct RegisterData {
	#[serde(rename = "userId")]
	pub user_id: Option<UserId>,
}

pub async fn post_register(
	State(app): State<App>,
	Path(event_id): Path<i64>,
	Json(data): Json<RegisterData>,
) -> GtResult<(StatusCode, Json<serde_json::Value>)> {
	let Some(user_id) = data.user_id else {
		return Err(Error::ValidationError("User ID is required.".to_string()));
	};

	coordinator::register(app.store_adapter.as_ref(), EventId(event_id), user_id).await?;

	Ok((
		StatusCode::CREATED,
		Json(serde_json::json!({ "message": "Successfully registered for the event." })),
	))
}

pub async fn delete_registration(
	State(app): State<App>,
	Path((event_id, user_id)): Path<(i64, i64)>,
) -> GtResult<Json<serde_json::Value>> {
	coordinator::cancel(app.store_adapter.as_ref(), EventId(event_id), UserId(user_id)).await?;

	Ok(Json(serde_json::json!({ "message": "Registration successfully cancelled." })))
}

// vim: ts=4
