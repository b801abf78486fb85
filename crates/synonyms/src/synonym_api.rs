use serde::Serialize;

use crate::SynonymError;

#[derive(Serialize)]
struct AddSynonymsRequest<'a> {
    word: &'a str,
    synonyms: &'a [String],
}

pub(crate) async fn add_synonyms(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
    synonyms: &[String],
) -> Result<(), SynonymError> {
    tracing::debug!(word, count = synonyms.len(), "adding synonyms");
    let res = client
        .post(format!("{base_url}/synonym"))
        .json(&AddSynonymsRequest { word, synonyms })
        .send()
        .await
        .map_err(SynonymError::Fetch)?;
    check_success(res).await?;
    Ok(())
}

pub(crate) async fn search_synonyms(
    client: &reqwest::Client,
    base_url: &str,
    word: &str,
) -> Result<Vec<String>, SynonymError> {
    tracing::debug!(word, "searching synonyms");
    let res = client
        .get(format!("{base_url}/synonym/{word}"))
        .send()
        .await
        .map_err(SynonymError::Fetch)?;
    let res = check_success(res).await?;
    res.json::<Vec<String>>()
        .await
        .map_err(SynonymError::Deserialize)
}

// keeps the response body around when the backend bothered to send one
async fn check_success(res: reqwest::Response) -> Result<reqwest::Response, SynonymError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let message = res.text().await.ok().filter(|body| !body.is_empty());
    Err(SynonymError::Status {
        status: status.as_u16(),
        message,
    })
}
