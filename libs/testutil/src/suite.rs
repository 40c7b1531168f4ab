use serde::Deserialize;

/// One expected line of standard output.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Line {
    Text {
        text: String,
    },
    Blank,
    /// `<key>=<token>`, where the token must verify against `password`.
    Token {
        #[serde(default = "default_key")]
        key: String,
        password: String,
        prefix: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct Suite {
    pub args: Vec<String>,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub stdout: Vec<Line>,
    pub stderr_contains: Option<String>,
    #[serde(default)]
    pub disable: bool,
}

fn default_key() -> String {
    "ACCESS_TOKEN".to_string()
}

fn default_success() -> bool {
    true
}
