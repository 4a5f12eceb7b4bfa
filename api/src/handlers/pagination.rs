//! Paging query parameters and the paged response body

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Page, PageRequest, SortOrder, DEFAULT_PAGE_SIZE};
use crate::error::AppError;

/// `?page=0&size=12&sort=name,asc`
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort: Option<String>,
}

impl PageParams {
    /// Negative pages clamp to 0, sizes below 1 fall back to the default
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(0).max(0) as u64;
        let size = match self.size {
            Some(size) if size >= 1 => size as u64,
            _ => DEFAULT_PAGE_SIZE,
        };

        let request = PageRequest::of(page, size);
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(request),
            Some(sort) => {
                let order: SortOrder = sort.parse().map_err(AppError::BadRequest)?;
                Ok(request.with_sort(order))
            }
        }
    }
}

/// JSON rendering of a `Page`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
    pub size: u64,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.number,
            size: page.size,
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            last: page.is_last(),
            empty: page.is_empty(),
            content: page.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::SortDirection;

    #[test]
    fn defaults() {
        let request = PageParams::default().into_page_request().unwrap();
        assert_eq!(request, PageRequest::of(0, 20));
    }

    #[test]
    fn negative_page_and_small_size_are_corrected() {
        let request = PageParams {
            page: Some(-3),
            size: Some(0),
            sort: None,
        }
        .into_page_request()
        .unwrap();

        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), 20);
    }

    #[test]
    fn size_is_capped() {
        let request = PageParams {
            size: Some(5000),
            ..Default::default()
        }
        .into_page_request()
        .unwrap();

        assert_eq!(request.size(), 2000);
    }

    #[test]
    fn sort_is_parsed() {
        let request = PageParams {
            sort: Some("price,desc".to_string()),
            ..Default::default()
        }
        .into_page_request()
        .unwrap();

        let sort = request.sort().unwrap();
        assert_eq!(sort.property, "price");
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn malformed_sort_is_bad_request() {
        let result = PageParams {
            sort: Some("name,up".to_string()),
            ..Default::default()
        }
        .into_page_request();

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn response_carries_derived_fields() {
        let page = Page::new(vec!["a", "b"], &PageRequest::of(0, 2), 5);
        let json = serde_json::to_value(PageResponse::from(page)).unwrap();

        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["numberOfElements"], 2);
        assert_eq!(json["first"], true);
        assert_eq!(json["last"], false);
        assert_eq!(json["empty"], false);
    }
}
