//! Page/limit pagination helpers.

/// Page number used when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller supplies none (or a non-positive one).
pub const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on page size regardless of what the caller asks for.
pub const MAX_LIMIT: i64 = 100;

/// Resolved pagination window, ready to feed into an SQL OFFSET/LIMIT pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Resolves caller-supplied page/limit values into a concrete window.
///
/// Missing or non-positive values fall back to the defaults rather than
/// producing an error; limits above [`MAX_LIMIT`] are capped.
pub fn resolve(page: Option<i64>, limit: Option<i64>) -> Page {
    let page = match page {
        Some(p) if p > 0 => p,
        _ => DEFAULT_PAGE,
    };
    let limit = match limit {
        Some(l) if l > 0 => l.min(MAX_LIMIT),
        _ => DEFAULT_LIMIT,
    };

    Page {
        limit,
        offset: (page - 1) * limit,
    }
}
