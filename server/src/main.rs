use std::{env, sync::Arc};

use gatherly::AppBuilder;
use gatherly::prelude::*;
use gatherly_store_adapter_postgres::StoreAdapterPostgres;

#[tokio::main]
async fn main() -> GtResult<()> {
	// Builder first: it initializes tracing, so adapter startup logs work
	let mut builder = AppBuilder::new();

	if let Ok(listen) = env::var("LISTEN") {
		builder.listen(listen);
	}

	let database_url = env::var("DATABASE_URL")
		.map_err(|_| Error::Internal("DATABASE_URL is not set".to_string()))?;
	let store_adapter = Arc::new(StoreAdapterPostgres::new(&database_url).await?);
	builder.store_adapter(store_adapter);

	builder.run().await
}

// vim: ts=4
