//! 游戏启动
//!
//! 把游戏脚本交给外部解释器作为子进程运行，并等待其退出。
//! 不传额外参数，也不截获输出。调用方应把整个启动放进后台任务，
//! 等子进程结束后再记录进度，界面线程从头到尾不被阻塞。

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use log::{info, warn};

/// 启动错误
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Game script not found: {0}")]
    ScriptMissing(PathBuf),

    #[error("Failed to spawn {interpreter}: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Game exited with {0}")]
    Failed(ExitStatus),
}

/// 用 `interpreter` 运行 `script`，等待子进程退出
///
/// 脚本缺失、解释器起不来、非零退出码都算启动失败。
pub async fn launch(interpreter: &str, script: &Path) -> Result<(), LaunchError> {
    if !script.exists() {
        return Err(LaunchError::ScriptMissing(script.to_path_buf()));
    }

    info!("Launching {script:?} with {interpreter}");
    let status = tokio::process::Command::new(interpreter)
        .arg(script)
        .status()
        .await
        .map_err(|source| LaunchError::Spawn {
            interpreter: interpreter.to_string(),
            source,
        })?;

    if status.success() {
        info!("Game exited normally: {script:?}");
        Ok(())
    } else {
        warn!("Game exited abnormally: {status}");
        Err(LaunchError::Failed(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_script_is_error() {
        let err = launch("sh", Path::new("/nonexistent/game.py"))
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::ScriptMissing(_)));
    }

    #[tokio::test]
    async fn test_successful_exit() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ok.sh");
        std::fs::write(&script, "exit 0\n").unwrap();

        launch("sh", &script).await.unwrap();
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fail.sh");
        std::fs::write(&script, "exit 3\n").unwrap();

        let err = launch("sh", &script).await.unwrap_err();
        assert!(matches!(err, LaunchError::Failed(_)));
    }

    #[tokio::test]
    async fn test_unknown_interpreter_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("game.py");
        std::fs::write(&script, "pass\n").unwrap();

        let err = launch("no-such-interpreter-d41d8cd9", &script)
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::Spawn { .. }));
    }
}
