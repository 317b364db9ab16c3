use crate::utils::error::{CleanupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CleanupError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_gcp_project_id(field_name: &str, project_id: &str) -> Result<()> {
    validate_non_empty_string(field_name, project_id)?;

    // Project ids are 6-30 characters, lowercase letters, digits and hyphens,
    // and must start with a letter.
    if project_id.len() < 6 || project_id.len() > 30 {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: project_id.to_string(),
            reason: "Project id must be between 6 and 30 characters".to_string(),
        });
    }

    if !project_id
        .chars()
        .next()
        .map(|c| c.is_ascii_lowercase())
        .unwrap_or(false)
    {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: project_id.to_string(),
            reason: "Project id must start with a lowercase letter".to_string(),
        });
    }

    if !project_id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: project_id.to_string(),
            reason: "Project id can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

pub fn validate_collection_id(field_name: &str, collection: &str) -> Result<()> {
    validate_non_empty_string(field_name, collection)?;

    if collection.contains('/') {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: collection.to_string(),
            reason: "Collection id cannot contain '/'".to_string(),
        });
    }

    if collection == "." || collection == ".." {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: collection.to_string(),
            reason: "Collection id cannot be '.' or '..'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_document_id(field_name: &str, document_id: &str) -> Result<()> {
    validate_non_empty_string(field_name, document_id)?;

    // A '/' or a relative segment would address a path outside the
    // configured collection.
    if document_id.contains('/') {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: document_id.to_string(),
            reason: "Document id cannot contain '/'".to_string(),
        });
    }

    if document_id == "." || document_id == ".." {
        return Err(CleanupError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: document_id.to_string(),
            reason: "Document id cannot be '.' or '..'".to_string(),
        });
    }

    Ok(())
}
