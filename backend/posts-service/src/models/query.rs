use crate::error::{AppError, Result};
use serde::Deserialize;
use std::str::FromStr;
use utoipa::IntoParams;

use super::Post;

/// Field a post listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    /// Case-insensitive sort key for a post.
    pub fn key(self, post: &Post) -> String {
        match self {
            SortField::Title => post.title.to_lowercase(),
            SortField::Content => post.content.to_lowercase(),
        }
    }
}

impl FromStr for SortField {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "title" => Ok(SortField::Title),
            "content" => Ok(SortField::Content),
            other => Err(AppError::InvalidQuery(format!(
                "Invalid 'sort field: '{}'. Must be 'title' or 'content'.",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(AppError::InvalidQuery(format!(
                "Invalid direction: '{}'. Must be 'asc' or 'desc'",
                other
            ))),
        }
    }
}

/// Query parameters for `GET /api/posts`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// `title` or `content`
    pub sort: Option<String>,
    /// `asc` (default) or `desc`
    pub direction: Option<String>,
}

impl ListPostsQuery {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            sort: first_value(pairs, "sort"),
            direction: first_value(pairs, "direction"),
        }
    }

    /// Validate the raw parameters. Sort is checked before direction.
    pub fn parse(&self) -> Result<(Option<SortField>, SortDirection)> {
        let sort = non_empty(&self.sort).map(SortField::from_str).transpose()?;
        let direction = non_empty(&self.direction)
            .map(SortDirection::from_str)
            .transpose()?
            .unwrap_or_default();
        Ok((sort, direction))
    }
}

/// Query parameters for `GET /api/posts/search`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Case-insensitive substring of the content
    pub content: Option<String>,
}

impl SearchQuery {
    /// Build from raw query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            title: first_value(pairs, "title"),
            content: first_value(pairs, "content"),
        }
    }

    pub fn title_term(&self) -> Option<String> {
        non_empty(&self.title).map(str::to_lowercase)
    }

    pub fn content_term(&self) -> Option<String> {
        non_empty(&self.content).map(str::to_lowercase)
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

// Empty query values behave as if the parameter was not sent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
