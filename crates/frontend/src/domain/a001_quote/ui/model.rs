use crate::shared::api_utils::{fetch_json, post_json};
use contracts::domain::a001_quote::draft::{ColorOption, QuoteDraft};

pub async fn fetch_colors() -> Result<Vec<ColorOption>, String> {
    fetch_json("/vendas/api/cores").await
}

/// Submits the finished draft. The server creates the service order and the
/// wizard navigates to the order list on success.
pub async fn submit_quote(draft: &QuoteDraft) -> Result<(), String> {
    post_json("/vendas/nova", draft).await
}
