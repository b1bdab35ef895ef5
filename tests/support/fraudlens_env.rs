use std::{
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use fraudlens::app_dirs::CONFIG_HOME_ENV;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Points `FRAUDLENS_CONFIG_HOME` at a temp directory for the guard's lifetime.
pub struct FraudlensEnvGuard {
    previous: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

impl FraudlensEnvGuard {
    pub fn set_config_home(path: PathBuf) -> Self {
        let lock = ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|err| err.into_inner());
        let previous = std::env::var(CONFIG_HOME_ENV).ok();
        // SAFETY: tests run under a global lock to prevent concurrent env mutations.
        unsafe {
            std::env::set_var(CONFIG_HOME_ENV, path);
        }
        Self {
            previous,
            _lock: lock,
        }
    }
}

impl Drop for FraudlensEnvGuard {
    fn drop(&mut self) {
        if let Some(value) = self.previous.take() {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                std::env::set_var(CONFIG_HOME_ENV, value);
            }
        } else {
            // SAFETY: tests run under a global lock to prevent concurrent env mutations.
            unsafe {
                std::env::remove_var(CONFIG_HOME_ENV);
            }
        }
    }
}

/// Logistic model over two claim columns, written for service tests.
pub const LOGREG_MODEL_JSON: &str = r#"{
    "model_id": "claims_logreg_test",
    "model_version": 1,
    "numeric": [{"column": "total_claim_amount", "mean": 10000.0, "scale": 2000.0}],
    "categorical": [{"column": "incident_severity", "categories": ["Major Damage", "Minor Damage"]}],
    "classifier": {"kind": "logreg", "weights": [1.5, 2.0, -1.0], "bias": -0.5}
}"#;
