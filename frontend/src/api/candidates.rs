use super::{expect_success, read_json, ApiError, CANDIDATES_PATH};
use common::model::candidate::Candidate;
use common::requests::CandidateRequest;
use gloo_net::http::Request;

pub async fn list() -> Result<Vec<Candidate>, ApiError> {
    let response = Request::get(CANDIDATES_PATH).send().await?;
    read_json(response).await
}

pub async fn get_by_id(id: i64) -> Result<Candidate, ApiError> {
    let response = Request::get(&candidate_url(id)).send().await?;
    read_json(response).await
}

pub async fn create(request: &CandidateRequest) -> Result<Candidate, ApiError> {
    let response = Request::post(CANDIDATES_PATH).json(request)?.send().await?;
    read_json(response).await
}

pub async fn update(id: i64, request: &CandidateRequest) -> Result<Candidate, ApiError> {
    let response = Request::put(&candidate_url(id)).json(request)?.send().await?;
    read_json(response).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&candidate_url(id)).send().await?;
    expect_success(response).await
}

fn candidate_url(id: i64) -> String {
    format!("{}/{}", CANDIDATES_PATH, id)
}
