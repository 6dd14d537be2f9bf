//! User persistence operations

use sqlx::PgPool;

use crate::utils::map_db_err;
use gatherly::prelude::*;
use gatherly::types::CreateUserData;

pub(crate) async fn create(db: &PgPool, data: &CreateUserData) -> GtResult<UserId> {
	let (id,): (i64,) =
		sqlx::query_as("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
			.bind(&*data.name)
			.bind(&*data.email)
			.fetch_one(db)
			.await
			.map_err(map_db_err)?;

	Ok(UserId(id))
}

// vim: ts=4
