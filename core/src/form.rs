//! Builder for `multipart/form-data` payloads.
//!
//! # Design
//! The builder only records field descriptors; file fields keep the path,
//! never the contents. `Connection::post_form` turns the descriptors into a
//! libcurl form chain for the duration of one transfer, so the chain is
//! created and freed exactly once per submission no matter how the call
//! exits, and the caller keeps ownership of the builder throughout.

use std::fs::File;
use std::path::{Path, PathBuf};

use curl::easy::Form;

use crate::error::FormError;

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    /// A literal value, as an `<input type="text">` would submit.
    Content { name: String, value: String },
    /// A file uploaded from `path`, read when the form is submitted.
    File { name: String, path: PathBuf },
}

impl FormField {
    pub fn name(&self) -> &str {
        match self {
            FormField::Content { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// An in-progress multipart form, consumed by reference by `post_form`.
///
/// Fields are submitted in the order they were appended.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    fields: Vec<FormField>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file field. The file must exist and be readable now; its
    /// contents are read again when the form is submitted.
    pub fn add_form_file(
        &mut self,
        field_name: &str,
        file_path: impl AsRef<Path>,
    ) -> Result<(), FormError> {
        check_name(field_name)?;
        let path = file_path.as_ref();
        if path.as_os_str().to_string_lossy().contains('\0') {
            return Err(FormError::InvalidPath(path.to_path_buf()));
        }
        check_readable(path)?;
        self.fields.push(FormField::File {
            name: field_name.to_string(),
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Append a literal field. The value is copied into the builder.
    pub fn add_form_content(&mut self, field_name: &str, field_value: &str) -> Result<(), FormError> {
        check_name(field_name)?;
        self.fields.push(FormField::Content {
            name: field_name.to_string(),
            value: field_value.to_string(),
        });
        Ok(())
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the libcurl form chain for one submission.
    pub(crate) fn to_curl_form(&self) -> Result<Form, curl::FormError> {
        let mut form = Form::new();
        for field in &self.fields {
            match field {
                FormField::Content { name, value } => {
                    form.part(name).contents(value.as_bytes()).add()?;
                }
                FormField::File { name, path } => {
                    form.part(name).file(path).add()?;
                }
            }
        }
        Ok(form)
    }
}

fn check_name(name: &str) -> Result<(), FormError> {
    if name.contains('\0') {
        return Err(FormError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn check_readable(path: &Path) -> Result<(), FormError> {
    let unreadable = |source| FormError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    let metadata = file.metadata().map_err(unreadable)?;
    if !metadata.is_file() {
        return Err(unreadable(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok(())
}
