use std::{fmt, str::FromStr};

use thiserror::Error;

/// Build the ARN of an IAM role in the given account
pub fn role_arn(account_id: &str, role_name: &str) -> String {
    format!("arn:aws:iam::{account_id}:role/{role_name}")
}

/// Session tag attached to the assumed-role session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagParseError {
    #[error("tag '{0}' is not in key:value form")]
    MissingSeparator(String),
    #[error("tag '{0}' has an empty key")]
    EmptyKey(String),
}

impl FromStr for SessionTag {
    type Err = TagParseError;

    /// Split on the first colon; anything after it belongs to the value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once(':')
            .ok_or_else(|| TagParseError::MissingSeparator(s.to_string()))?;

        if key.is_empty() {
            return Err(TagParseError::EmptyKey(s.to_string()));
        }

        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for SessionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_arn_format() {
        assert_eq!(
            role_arn("123456789012", "Admin"),
            "arn:aws:iam::123456789012:role/Admin"
        );
        assert_eq!(
            role_arn("000000000000", "path-less.Role_Name"),
            "arn:aws:iam::000000000000:role/path-less.Role_Name"
        );
    }

    #[test]
    fn test_parse_simple_tag() {
        let tag: SessionTag = "team:bolt".parse().unwrap();
        assert_eq!(tag.key, "team");
        assert_eq!(tag.value, "bolt");
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let tag: SessionTag = "url:https://example.com:8443".parse().unwrap();
        assert_eq!(tag.key, "url");
        assert_eq!(tag.value, "https://example.com:8443");
    }

    #[test]
    fn test_parse_allows_empty_value() {
        let tag: SessionTag = "flag:".parse().unwrap();
        assert_eq!(tag.key, "flag");
        assert_eq!(tag.value, "");
    }

    #[test]
    fn test_parse_without_colon_fails() {
        let err = "teambolt".parse::<SessionTag>().unwrap_err();
        assert_eq!(err, TagParseError::MissingSeparator("teambolt".to_string()));
        assert_eq!(err.to_string(), "tag 'teambolt' is not in key:value form");
    }

    #[test]
    fn test_parse_empty_string_fails() {
        assert!("".parse::<SessionTag>().is_err());
    }

    #[test]
    fn test_parse_empty_key_fails() {
        let err = ":bolt".parse::<SessionTag>().unwrap_err();
        assert_eq!(err, TagParseError::EmptyKey(":bolt".to_string()));
    }

    #[test]
    fn test_one_tag_per_input() {
        let inputs = ["team:bolt", "env:prod", "cost-center:42:a"];
        let tags: Vec<SessionTag> = inputs.iter().map(|s| s.parse().unwrap()).collect();

        assert_eq!(tags.len(), inputs.len());
        for (input, tag) in inputs.iter().zip(&tags) {
            let (key, value) = input.split_once(':').unwrap();
            assert_eq!(tag.key, key);
            assert_eq!(tag.value, value);
            assert_eq!(tag.to_string(), *input);
        }
    }
}
