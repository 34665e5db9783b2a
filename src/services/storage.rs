use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::models::Job;

const JOBS_KEY: &str = "intelliapply.jobs";
const CONFIG_KEY: &str = "intelliapply.board_config";

fn local_storage() -> Result<web_sys::Storage, BoardError> {
    web_sys::window()
        .ok_or_else(|| BoardError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|_| BoardError::Storage("localStorage access denied".to_string()))?
        .ok_or_else(|| BoardError::Storage("localStorage not available".to_string()))
}

fn read_key(key: &str) -> Result<Option<String>, BoardError> {
    local_storage()?
        .get_item(key)
        .map_err(|_| BoardError::Storage(format!("failed to read {}", key)))
}

// Load saved jobs; `Ok(None)` means nothing has been stored yet
pub fn load_jobs() -> Result<Option<Vec<Job>>, BoardError> {
    match read_key(JOBS_KEY)? {
        Some(json) => {
            let jobs: Vec<Job> = serde_json::from_str(&json)?;
            web_sys::console::log_1(&format!("Loaded {} jobs from storage", jobs.len()).into());
            Ok(Some(jobs))
        }
        None => Ok(None),
    }
}

pub fn save_jobs(jobs: &[Job]) -> Result<(), BoardError> {
    let json = serde_json::to_string(jobs)?;
    local_storage()?
        .set_item(JOBS_KEY, &json)
        .map_err(|_| BoardError::Storage("failed to write jobs (quota exceeded?)".to_string()))?;
    web_sys::console::log_1(&format!("Saved {} jobs to storage", jobs.len()).into());
    Ok(())
}

// Board config falls back to defaults on any problem, logging why
pub fn load_board_config() -> BoardConfig {
    let stored = match read_key(CONFIG_KEY) {
        Ok(stored) => stored,
        Err(e) => {
            web_sys::console::warn_1(&format!("Using default board config: {}", e).into());
            return BoardConfig::default();
        }
    };

    match stored.as_deref().map(BoardConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            web_sys::console::warn_1(&format!("Ignoring malformed board config: {}", e).into());
            BoardConfig::default()
        }
        None => BoardConfig::default(),
    }
}
