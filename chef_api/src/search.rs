use crate::api_client::ApiClient;
use crate::errors::ChefError;
use failure::Error;
use serde_json::{json, Value};
use url::Url;

/// Rows requested per page, matching knife's default.
pub const DEFAULT_ROWS: u64 = 1000;

/// A search against one index, fetched page by page until the server
/// reports no more results.
///
/// ```no_run
/// # use chef_api::ApiClient;
/// # fn main() -> Result<(), failure::Error> {
/// let client = ApiClient::autoconfigure(None)?;
/// let nodes = client.search().search_index("node").q("role:web").get()?;
/// # Ok(())
/// # }
/// ```
pub struct SearchQuery<'c> {
    client: &'c ApiClient,
    index: String,
    q: String,
    rows: u64,
}

impl<'c> SearchQuery<'c> {
    pub(crate) fn new(client: &'c ApiClient) -> SearchQuery<'c> {
        SearchQuery {
            client,
            index: String::from("node"),
            q: String::from("*:*"),
            rows: DEFAULT_ROWS,
        }
    }

    pub fn search_index(mut self, index: &str) -> Self {
        self.index = index.into();
        self
    }

    pub fn q(mut self, q: &str) -> Self {
        self.q = q.into();
        self
    }

    pub fn rows(mut self, rows: u64) -> Self {
        self.rows = rows.max(1);
        self
    }

    fn page_url(&self, start: u64) -> Result<Url, Error> {
        let mut url = self.client.endpoint(&["search", &self.index])?;
        url.query_pairs_mut()
            .append_pair("q", &self.q)
            .append_pair("start", &start.to_string())
            .append_pair("rows", &self.rows.to_string());
        Ok(url)
    }

    /// Run the search, returning a single `{total, start, rows}` document
    /// holding every row in server order.
    pub fn get(self) -> Result<Value, Error> {
        let result = collect_pages(self.rows, |start| {
            let url = self.page_url(start)?;
            self.client.get(&url)
        })?;
        info!(
            "Search of {} for {:?} found {} rows",
            self.index,
            self.q,
            result["total"]
        );
        Ok(result)
    }
}

fn collect_pages<F>(page_size: u64, mut fetch: F) -> Result<Value, Error>
where
    F: FnMut(u64) -> Result<Value, Error>,
{
    let mut rows: Vec<Value> = Vec::new();
    let mut start = 0;
    loop {
        let mut page = fetch(start)?;
        let total = page
            .get("total")
            .and_then(Value::as_u64)
            .ok_or(ChefError::MalformedResponse("total"))?;
        let batch = match page.get_mut("rows").map(Value::take) {
            Some(Value::Array(batch)) => batch,
            _ => return Err(ChefError::MalformedResponse("rows").into()),
        };
        debug!("Page at {} held {} of {} rows", start, batch.len(), total);

        if batch.is_empty() {
            break;
        }
        rows.extend(batch);
        start += page_size;
        if start >= total {
            break;
        }
    }
    Ok(json!({ "total": rows.len(), "start": 0, "rows": rows }))
}
