use synonyms::SynonymClient;

/// Local state of the add and search sections. Both share the one error
/// slot; whichever flow ran last owns the message.
#[derive(Debug, Default)]
pub struct SynonymForm {
    pub word: String,
    pub synonyms: String,
    pub search_word: String,
    pub result: Vec<String>,
    pub error: Option<String>,
}

/// Split a comma-separated synonym list, trimming whitespace around each
/// token. Empty tokens are kept; filtering them is the backend's call.
pub fn split_synonyms(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}

impl SynonymForm {
    /// Submits the word with its synonyms, returns true when it was added
    /// and the inputs were cleared.
    pub async fn submit_add(&mut self, client: &SynonymClient) -> bool {
        let new_synonyms = split_synonyms(&self.synonyms);
        if self.word.is_empty() || new_synonyms.is_empty() {
            self.error = Some("Please provide a word and its synonyms.".to_string());
            return false;
        }
        match client.add_synonyms(&self.word, &new_synonyms).await {
            Ok(()) => {
                self.word.clear();
                self.synonyms.clear();
                self.error = None;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "failed to add synonyms");
                self.error = Some("Failed to add synonyms.".to_string());
                false
            }
        }
    }

    /// Looks up the search term, returns true when the result list was
    /// replaced with the backend's response.
    pub async fn submit_search(&mut self, client: &SynonymClient) -> bool {
        if self.search_word.is_empty() {
            self.error = Some("Please enter a word to search for synonyms.".to_string());
            return false;
        }
        match client.search_synonyms(&self.search_word).await {
            Ok(found) => {
                self.result = found;
                self.error = None;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "failed to search synonyms");
                self.error = Some("No synonyms found for this word.".to_string());
                self.result.clear();
                false
            }
        }
    }
}
