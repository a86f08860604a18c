use gloo_net::http::Request;

use common::model::history::HistoryItem;

use super::ServiceError;

/// Lists past analyses from `url`.
pub async fn fetch_history(url: &str) -> Result<Vec<HistoryItem>, ServiceError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    Ok(response.json::<Vec<HistoryItem>>().await?)
}
