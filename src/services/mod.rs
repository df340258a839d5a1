//! Domain services. Each service owns a handle to the connection pool and
//! exposes async operations returning [`ServiceResult`](crate::errors::ServiceResult).

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod orders;
pub mod payments;
pub mod reviews;
pub mod sellers;
pub mod wishlist;

use serde::{Deserialize, Serialize};

/// Paging and free-text filter shared by the list endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            search: None,
        }
    }
}

impl ListQuery {
    pub fn new(page: u64, per_page: u64) -> Self {
        Self {
            page,
            per_page,
            search: None,
        }
    }

    /// Zero-based page index for sea-orm paginators
    pub fn page_index(&self) -> u64 {
        self.page.max(1) - 1
    }

    pub fn page_size(&self) -> u64 {
        self.per_page.clamp(1, 100)
    }

    /// Trimmed search term, `None` when blank
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// One page of results plus the unpaged total
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// URL slug: lowercase ASCII alphanumerics separated by single dashes
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Splits `items` into rows of `size` for the storefront carousels
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    items.chunks(size.max(1)).map(<[T]>::to_vec).collect()
}

/// `YYYY-MM-DD` for the current UTC day
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
