use anyhow::Result;

use crate::api;

pub async fn run(host: String, port: String) -> Result<()> {
    api::serve(host, port).await
}
