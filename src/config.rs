// Common constants used across modules
pub const CLAUDE_PACKAGE: &str = "@anthropic-ai/claude-code";

pub const BUILTIN_PROVIDER: &str = "Anthropic";
pub const BUILTIN_PROVIDER_LABEL: &str = "Anthropic (using official API defaults)";
pub const DEFAULT_PRESET_NAME: &str = "Moonshot AI";
pub const DEFAULT_PRESET_URL: &str = "https://api.moonshot.cn/anthropic/";

pub const CLAUDE_DIRECTORY: &str = ".claude";
pub const PROVIDERS_FILE_NAME: &str = "providers.json";
pub const CLAUDE_SETTINGS_FILE_NAME: &str = ".claude.json";
pub const LOG_FILE_NAME: &str = "ccb.log";

pub const API_KEY_VAR: &str = "ANTHROPIC_API_KEY";
pub const BASE_URL_VAR: &str = "ANTHROPIC_BASE_URL";

pub const MIN_NODE_MAJOR: u32 = 18;

// Log rotation: ccb.log -> ccb.log.1 -> ccb.log.2, oldest dropped
pub const MAX_LOG_SIZE: u64 = 1024 * 1024;
pub const MAX_LOG_FILES: u32 = 3;
