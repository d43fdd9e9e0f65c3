use serde::{Deserialize, Serialize};

/// One column of an uploaded manifest: the raw header text plus a small
/// content sample in original row order.
///
/// Headers may be empty and may repeat across columns; both are handled by
/// the engine, never rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawColumn {
    pub header: String,
    pub sample: Vec<String>,
}

impl RawColumn {
    /// Column with a header and no content sample.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sample: Vec::new(),
        }
    }

    /// Column with a header and sampled cell values.
    pub fn with_sample<I, S>(header: impl Into<String>, sample: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into(),
            sample: sample.into_iter().map(Into::into).collect(),
        }
    }

    /// True if at least one sampled value is non-blank.
    pub fn has_content(&self) -> bool {
        self.sample.iter().any(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_samples_count_as_no_content() {
        let column = RawColumn::with_sample("Peso", ["", "  ", "\t"]);
        assert!(!column.has_content());
        assert!(RawColumn::with_sample("Peso", ["", "1.5"]).has_content());
        assert!(!RawColumn::new("Peso").has_content());
    }
}
