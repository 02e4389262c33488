use serde::Deserialize;

/// The input received from Claude Code on stdin for a PostToolUse hook.
///
/// Field names match the snake_case JSON that Claude Code sends.
/// Every field is optional and defaults to an empty string — a hook must
/// never fail the agent's workflow over a payload it cannot read.
/// Unknown fields are silently ignored for forward compatibility.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub tool_input: ToolInput,
    #[serde(default)]
    pub cwd: String,
}

/// The tool-specific portion of the payload. For file-editing tools this
/// carries the path of the file that was just modified.
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: String,
}

impl HookInput {
    /// Decode a raw stdin payload, folding any failure into empty input.
    ///
    /// Malformed JSON, a non-object document, or wrongly-typed fields all
    /// yield the default (empty `file_path`, empty `cwd`), which downstream
    /// steps treat as "nothing to do".
    ///
    /// # Examples
    ///
    /// ```
    /// use nette_lint_hooks::protocol::HookInput;
    ///
    /// let input = HookInput::from_json(r#"{"tool_input": {"file_path": "/tmp/a.php"}}"#);
    /// assert_eq!(input.tool_input.file_path, "/tmp/a.php");
    /// assert_eq!(input.cwd, "");
    ///
    /// let input = HookInput::from_json("not json at all");
    /// assert_eq!(input.tool_input.file_path, "");
    /// ```
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}
