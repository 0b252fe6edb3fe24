//! `gait analyze`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use gait_analysis::{AnalysisParams, TrialFiles, TrialInput, analyze_trial};
use gait_types::BiomechanicalModel;
use tracing::info;

/// Arguments of one analysis.
pub struct Request {
    pub trc: PathBuf,
    pub htr: PathBuf,
    pub model: String,
    pub force: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

pub fn run(request: &Request) -> Result<()> {
    let model = BiomechanicalModel::from_name(&request.model)?;
    let params = match &request.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading configuration {}", path.display()))?;
            AnalysisParams::from_json(&text)
                .with_context(|| format!("parsing configuration {}", path.display()))?
        }
        None => AnalysisParams::default(),
    };

    let files = TrialFiles {
        trc: request.trc.clone(),
        htr: request.htr.clone(),
        force: request.force.clone(),
    };
    let input = TrialInput::load(&files, model).context("loading trial")?;
    let report = analyze_trial(&input, &params).context("analysing trial")?;
    let json = report.to_json(request.pretty)?;

    match &request.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing report {}", path.display()))?;
            info!(path = %path.display(), "Report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn request(dir: &TempDir) -> Request {
        Request {
            trc: dir.path().join("walk.trc"),
            htr: dir.path().join("walk.htr"),
            model: "cgm23".to_string(),
            force: None,
            config: None,
            output: Some(dir.path().join("report.json")),
            pretty: false,
        }
    }

    #[test]
    fn unknown_model_fails_first() {
        let dir = TempDir::new().unwrap();
        let mut req = request(&dir);
        req.model = "plug-in".to_string();
        let err = run(&req).unwrap_err();
        assert!(err.to_string().contains("unknown biomechanical model"));
    }

    #[test]
    fn invalid_configuration_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("config.json");
        fs::write(&config, r#"{ "cycles": { "points": 1 } }"#).unwrap();
        let mut req = request(&dir);
        req.config = Some(config);
        let err = run(&req).unwrap_err();
        assert!(format!("{err:#}").contains("parsing configuration"));
    }

    #[test]
    fn missing_trial_files_are_reported() {
        let dir = TempDir::new().unwrap();
        let err = run(&request(&dir)).unwrap_err();
        assert!(format!("{err:#}").contains("file not found"));
        assert!(!dir.path().join("report.json").exists());
    }
}
