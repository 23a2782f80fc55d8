// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository placeholder substitution in plan fragments

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Token replaced with the current repository name
pub const PLACEHOLDER: &str = "((blob))";

/// Errors instantiating a fragment
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to serialize fragment: {0}")]
    Serialize(#[source] serde_yaml::Error),
    #[error("fragment for {repository} is invalid after substitution: {source}")]
    Reparse {
        repository: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Replace every [`PLACEHOLDER`] in `template` with `repository`
pub fn instantiate_str(template: &str, repository: &str) -> String {
    template.replace(PLACEHOLDER, repository)
}

/// Instantiate a fragment for one repository.
///
/// The fragment is serialized to YAML, the placeholder is replaced as plain
/// text, and the result is parsed back. The placeholder may therefore appear
/// in any string anywhere in the fragment, and it is replaced even inside
/// unrelated literals that happen to contain it. Plan steps reject unknown
/// keys, so a substitution that breaks the structure fails here.
pub fn instantiate<T>(fragment: &T, repository: &str) -> Result<T, TemplateError>
where
    T: Serialize + DeserializeOwned,
{
    let yaml = serde_yaml::to_string(fragment).map_err(TemplateError::Serialize)?;
    serde_yaml::from_str(&instantiate_str(&yaml, repository)).map_err(|source| {
        TemplateError::Reparse {
            repository: repository.to_string(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
