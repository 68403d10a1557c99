//! # Response Envelope
//!
//! Every backend response is wrapped as `{code, message, data, timestamp}`.
//! A `code` of [`SUCCESS_CODE`] marks success; anything else is a failure whose
//! `message` is meant for the user.

use serde::{Deserialize, Serialize};

/// Envelope code the backend uses for success.
pub const SUCCESS_CODE: i32 = 200;

/// Generic response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl<T> ApiEnvelope<T> {
    /// Build a success envelope around `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: Some("success".to_string()),
            data: Some(data),
            timestamp: None,
        }
    }

    /// Build a failure envelope with the given code and message.
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
            timestamp: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// One page of a paged listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: i32,
    #[serde(default)]
    pub page_size: i32,
    #[serde(default)]
    pub total_pages: i32,
}

impl<T> PageResult<T> {
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Common paging query (`?page=&pageSize=&keyword=`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PageQuery {
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_parses_data() {
        let body = r#"{"code":200,"message":"success","data":[1,2,3],"timestamp":1714552200000}"#;
        let envelope: ApiEnvelope<Vec<i32>> = serde_json::from_str(body).unwrap();

        assert!(envelope.is_success());
        assert_eq!(envelope.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_error_envelope_without_data() {
        let body = r#"{"code":500,"message":"sync failed"}"#;
        let envelope: ApiEnvelope<i32> = serde_json::from_str(body).unwrap();

        assert!(!envelope.is_success());
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.message.as_deref(), Some("sync failed"));
    }

    #[test]
    fn test_page_result_camel_case() {
        let body = r#"{"list":["a"],"total":41,"page":3,"pageSize":20,"totalPages":3}"#;
        let page: PageResult<String> = serde_json::from_str(body).unwrap();

        assert_eq!(page.page_size, 20);
        assert!(page.is_last_page());
    }

    #[test]
    fn test_page_query_omits_unset_fields() {
        let query = PageQuery::page(1, 10).with_keyword("tee");
        let json = serde_json::to_value(&query).unwrap();

        assert_eq!(json, serde_json::json!({"page": 1, "pageSize": 10, "keyword": "tee"}));
    }
}
