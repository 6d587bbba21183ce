use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct Persona {
    #[serde(default)]
    pub role: String,
}

/// The job description appears in the wild either as a plain string or as an
/// object with a `task` field. Resolved to one canonical string via
/// [`InputJson::task`] before the pipeline runs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobField {
    Text(String),
    Structured {
        #[serde(default)]
        task: String,
    },
}

impl JobField {
    pub fn task(&self) -> &str {
        match self {
            JobField::Text(text) => text,
            JobField::Structured { task } => task,
        }
    }
}

// Unexpected shapes degrade to None instead of failing the whole input parse.
fn lenient_job<'de, D>(deserializer: D) -> Result<Option<JobField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<JobField>::deserialize(deserializer).unwrap_or(None))
}

#[derive(Debug, Deserialize)]
pub struct DocumentRef {
    #[serde(default)]
    pub filename: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct InputJson {
    #[serde(default)]
    pub persona: Persona,
    #[serde(default, deserialize_with = "lenient_job")]
    pub job_to_be_done: Option<JobField>,
    #[serde(default, deserialize_with = "lenient_job")]
    pub job: Option<JobField>,
    #[serde(default)]
    pub documents: Vec<DocumentRef>,
}

impl InputJson {
    /// Canonical task string: `job_to_be_done.task` wins, then `job` in either
    /// shape, then empty.
    pub fn task(&self) -> String {
        self.job_to_be_done
            .as_ref()
            .or(self.job.as_ref())
            .map(|job| job.task().to_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    pub importance_rank: u32,
    pub page_number: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Metadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub processing_timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OutputJson {
    pub metadata: Metadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_from_job_to_be_done_object() {
        let input: InputJson =
            serde_json::from_str(r#"{"job_to_be_done": {"task": "plan a trip"}}"#).unwrap();
        assert_eq!(input.task(), "plan a trip");
    }

    #[test]
    fn task_from_plain_job_string() {
        let input: InputJson = serde_json::from_str(r#"{"job": "review forms"}"#).unwrap();
        assert_eq!(input.task(), "review forms");
    }

    #[test]
    fn task_from_job_object() {
        let input: InputJson = serde_json::from_str(r#"{"job": {"task": "cater"}}"#).unwrap();
        assert_eq!(input.task(), "cater");
    }

    #[test]
    fn malformed_job_degrades_to_empty() {
        let input: InputJson = serde_json::from_str(r#"{"job_to_be_done": 42}"#).unwrap();
        assert_eq!(input.task(), "");
    }

    #[test]
    fn missing_fields_default() {
        let input: InputJson = serde_json::from_str("{}").unwrap();
        assert_eq!(input.persona.role, "");
        assert_eq!(input.task(), "");
        assert!(input.documents.is_empty());
    }
}
