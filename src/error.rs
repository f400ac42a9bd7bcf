use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("page `{page}` lists project id {id} more than once")]
    DuplicateProjectId { page: String, id: u32 },

    #[error("page slug `{0}` is used by more than one page")]
    DuplicatePageSlug(String),

    #[error("page `{0}` has an empty slug")]
    EmptySlug(String),
}
