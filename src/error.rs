use thiserror::Error;

#[derive(Error, Debug)]
pub enum DebsweepError {
    #[error("Package list refresh failed: {0}")]
    RefreshFailed(String),

    #[error("Upgrade check failed: {0}")]
    UpgradeCheck(String),

    #[error("Flatpak check failed: {0}")]
    FlatpakCheck(String),

    #[error("Autoremove check failed: {0}")]
    RemovalCheck(String),
}

pub type Result<T> = std::result::Result<T, DebsweepError>;
