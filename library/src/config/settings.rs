use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

const DEFAULT_SCALE: i16 = 100;
const DEFAULT_BUFFER_SIZE: usize = 15;
const MIN_BUFFER_SIZE: usize = 3;
const MAX_BUFFER_SIZE: usize = 64;

const AXIS_CORRECTED_EXTENSION: &str = "fbx";
const AXIS_CORRECTION: f32 = 0.01;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("io problem while reading settings: {what:?}")]
    IoError { what: String },
    #[error("format problem in settings: {what:?}")]
    FormatError { what: String },
    #[error("invalid settings: {what:?}")]
    InvalidError { what: String },
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Assembly,
    C,
}

impl ExportFormat {
    #[must_use]
    pub fn model_file_name(self) -> &'static str {
        match self {
            ExportFormat::Assembly => "model.s",
            ExportFormat::C => "model.inc.c",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FogSettings {
    pub color: [u8; 4],
    pub near: i32,
    pub far: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionSettings {
    pub export_format: ExportFormat,
    pub scale: i16,
    pub buffer_size: usize,
    pub two_cycle: bool,
    pub fog: Option<FogSettings>,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            export_format: ExportFormat::default(),
            scale: DEFAULT_SCALE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            two_cycle: false,
            fog: None,
        }
    }
}

impl ConversionSettings {
    pub fn load(source_file: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(source_file).map_err(|e| SettingsError::IoError { what: e.to_string() })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: ConversionSettings = serde_json::from_str(text).map_err(|e| SettingsError::FormatError { what: e.to_string() })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(MIN_BUFFER_SIZE..=MAX_BUFFER_SIZE).contains(&self.buffer_size) {
            return Err(SettingsError::InvalidError {
                what: format!("buffer size {} is outside of {}..={}", self.buffer_size, MIN_BUFFER_SIZE, MAX_BUFFER_SIZE),
            });
        }
        if self.scale == 0 {
            return Err(SettingsError::InvalidError { what: "scale must not be zero".to_string() });
        }
        Ok(())
    }
}

/// Some exporters write positions pre-multiplied by 100.
#[must_use]
pub fn source_scale_correction(source_file: &Path) -> f32 {
    match source_file.extension().and_then(|extension| extension.to_str()) {
        Some(AXIS_CORRECTED_EXTENSION) => AXIS_CORRECTION,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings_are_valid() {
        let system_under_test = ConversionSettings::default();

        assert!(system_under_test.validate().is_ok());
        assert_eq!(system_under_test.export_format, ExportFormat::Assembly);
        assert_eq!(system_under_test.fog, None);
    }

    #[test]
    fn test_from_json_with_fog() {
        let text = r#"{
            "export_format": "c",
            "scale": 212,
            "fog": { "color": [255, 240, 200, 255], "near": 980, "far": 1000 }
        }"#;

        let system_under_test = ConversionSettings::from_json(text).unwrap();

        assert_eq!(system_under_test.export_format, ExportFormat::C);
        assert_eq!(system_under_test.scale, 212);
        assert_eq!(system_under_test.buffer_size, DEFAULT_BUFFER_SIZE);
        assert_eq!(system_under_test.fog, Some(FogSettings { color: [255, 240, 200, 255], near: 980, far: 1000 }));
    }

    #[rstest]
    #[case(r#"{ "buffer_size": 2 }"#)]
    #[case(r#"{ "buffer_size": 65 }"#)]
    #[case(r#"{ "scale": 0 }"#)]
    fn test_from_json_rejects_invalid_values(#[case] text: &str) {
        assert!(matches!(ConversionSettings::from_json(text), Err(SettingsError::InvalidError { .. })));
    }

    #[rstest]
    #[case(r#"{ "scale": "big" }"#)]
    #[case(r#"{ "unknown": 1 }"#)]
    #[case("not json")]
    fn test_from_json_rejects_malformed_text(#[case] text: &str) {
        assert!(matches!(ConversionSettings::from_json(text), Err(SettingsError::FormatError { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().expect("failed to create temp file");
        temp_file.write_all(br#"{ "two_cycle": true, "buffer_size": 32 }"#).expect("failed to write settings");

        let system_under_test = ConversionSettings::load(temp_file.path()).unwrap();

        assert!(system_under_test.two_cycle);
        assert_eq!(system_under_test.buffer_size, 32);
    }

    #[rstest]
    #[case("level/area.fbx", AXIS_CORRECTION)]
    #[case("level/area.obj", 1.0)]
    #[case("level/area.FBX", 1.0)]
    #[case("level/fbx", 1.0)]
    fn test_source_scale_correction(#[case] source: &str, #[case] expected: f32) {
        assert_eq!(source_scale_correction(Path::new(source)), expected);
    }

    #[test]
    fn test_model_file_names() {
        assert_eq!(ExportFormat::Assembly.model_file_name(), "model.s");
        assert_eq!(ExportFormat::C.model_file_name(), "model.inc.c");
    }
}
