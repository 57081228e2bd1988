use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use council::ResultMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A saved council run: the question, who was asked, and what each model said
#[derive(Debug, Serialize, Deserialize)]
pub struct SavedRun {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub prompt: String,
    pub models: Vec<String>,
    pub results: ResultMap,
}

impl SavedRun {
    pub fn new(prompt: &str, models: &[String], results: ResultMap) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            prompt: prompt.to_string(),
            models: models.to_vec(),
            results,
        }
    }
}

/// Write the run to `{data_dir}/{id}.json`, creating the directory if needed
pub fn save_run(data_dir: &Path, run: &SavedRun) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let path = data_dir.join(format!("{}.json", run.id));
    let file = fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(file, run)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use council::ModelResponse;
    use tempfile::tempdir;

    #[test]
    fn test_save_run_creates_directory() -> Result<()> {
        let root = tempdir()?;
        let data_dir = root.path().join("data").join("conversations");

        let mut results = ResultMap::new();
        results.insert("mistral".to_string(), Some(ModelResponse::new("hi")));
        results.insert("llama2".to_string(), None);
        let models = vec!["mistral".to_string(), "llama2".to_string()];
        let run = SavedRun::new("hello", &models, results);

        let path = save_run(&data_dir, &run)?;

        assert_eq!(path, data_dir.join(format!("{}.json", run.id)));
        let saved: SavedRun = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(saved.id, run.id);
        assert_eq!(saved.prompt, "hello");
        assert_eq!(saved.models, models);
        assert_eq!(saved.results["mistral"], Some(ModelResponse::new("hi")));
        assert_eq!(saved.results["llama2"], None);
        Ok(())
    }
}
