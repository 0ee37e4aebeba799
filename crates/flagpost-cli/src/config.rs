use serde::Deserialize;

#[derive(Deserialize)]
pub struct FlagpostConfig {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default = "default_comment_class")]
    pub comment_class: String,
    #[serde(default = "default_comment_class_suffix")]
    pub comment_class_suffix: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_output")]
    pub output: String,
}

fn default_comment_class() -> String {
    flagpost_core::consts::COMMENT_CLASS.to_string()
}
fn default_comment_class_suffix() -> String {
    flagpost_core::consts::COMMENT_CLASS_SUFFIX.to_string()
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; Flagpost/0.1)".to_string()
}
fn default_output() -> String {
    "annotated.html".to_string()
}

impl Default for FlagpostConfig {
    fn default() -> Self {
        Self {
            language: None,
            languages: Vec::new(),
            comment_class: default_comment_class(),
            comment_class_suffix: default_comment_class_suffix(),
            user_agent: default_user_agent(),
            output: default_output(),
        }
    }
}

impl FlagpostConfig {
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
