use std::sync::{LazyLock, Mutex};

/// Serializes env-var mutation across the `VIBECODE_*` override tests.
pub(super) static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets or removes one env var for the duration of a test, restoring the
/// pre-test value on drop.
pub(super) struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvVarGuard {
    pub(super) fn set(key: &'static str, value: &str) -> Self {
        Self::swap(key, Some(value))
    }

    pub(super) fn unset(key: &'static str) -> Self {
        Self::swap(key, None)
    }

    fn swap(key: &'static str, value: Option<&str>) -> Self {
        let previous = std::env::var(key).ok();
        apply(key, value);
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        apply(self.key, self.previous.as_deref());
    }
}

fn apply(key: &str, value: Option<&str>) {
    // SAFETY: Test-only helper. Every test touching these vars holds
    // ENV_LOCK, so process env mutation is serialized.
    unsafe {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }
}
