use tokio::sync::oneshot;

use uc_core::ports::ClipboardError;
use uc_core::ClipboardContent;

/// Commands accepted by the clipboard runtime.
pub enum PlatformCommand {
    /// 写入剪切板内容（不作为本地新变化上报）
    WriteClipboard {
        content: ClipboardContent,
        reply: oneshot::Sender<Result<(), ClipboardError>>,
    },
}
