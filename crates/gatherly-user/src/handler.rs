use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::prelude::*;
use gatherly_types::types::CreateUserData;

#[derive(Serialize)]
pub struct CreatedUser {
	#[serde(rename = "userId")]
	pub user_id: UserId,
	pub name: Box<str>,
	pub email: Box<str>,
}

pub async fn post_user(
	State(app): State<App>,
	Json(data): Json<CreateUserData>,
) -> GtResult<(StatusCode, Json<CreatedUser>)> {
	let user_id = app.store_adapter.create_user(&data).await?;
	info!("Created user {} <{}>", user_id, data.email);

	Ok((
		StatusCode::CREATED,
		Json(CreatedUser { user_id, name: data.name, email: data.email }),
	))
}

// vim: ts=4
