//! # QR Scan Session
//!
//! Reads one recipient address from a camera. The camera is held by a guard
//! that releases it on every exit path: a decoded payload, a camera error,
//! user cancellation, or the scan future being dropped by its owner.

use async_trait::async_trait;
use lib_core::{AppError, Result};
use lib_utils::decode_qr_payload;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

/// A video source that can decode QR codes.
#[async_trait]
pub trait Camera: Send + Sync {
    /// Acquire the device.
    async fn open(&self) -> Result<()>;

    /// Wait for the next decoded QR payload.
    async fn next_payload(&self) -> Result<String>;

    /// Release the device. Called exactly once per successful `open`.
    fn release(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Recipient address with any URI scheme and parameters stripped
    Scanned(String),
    Cancelled,
}

struct CameraGuard<'a> {
    camera: &'a dyn Camera,
}

impl Drop for CameraGuard<'_> {
    fn drop(&mut self) {
        debug!("releasing camera");
        self.camera.release();
    }
}

/// Scan until a payload is decoded or `cancel` fires.
///
/// Dropping the `cancel` sender counts as cancellation.
///
/// # Errors
///
/// Returns `AppError::Camera` if the camera cannot be opened or fails while scanning.
pub async fn scan(camera: &dyn Camera, cancel: oneshot::Receiver<()>) -> Result<ScanOutcome> {
    camera.open().await.map_err(into_camera_error)?;
    let _guard = CameraGuard { camera };
    info!("scanning for QR code");

    tokio::select! {
        payload = camera.next_payload() => {
            let payload = payload.map_err(|e| {
                warn!(error = %e, "scan failed");
                into_camera_error(e)
            })?;
            Ok(ScanOutcome::Scanned(decode_qr_payload(&payload)))
        }
        _ = cancel => {
            info!("scan cancelled");
            Ok(ScanOutcome::Cancelled)
        }
    }
}

fn into_camera_error(err: AppError) -> AppError {
    match err {
        AppError::Camera(_) => err,
        other => AppError::Camera(other.user_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeCamera {
        payload: Mutex<Option<Result<String>>>,
        open_error: Option<AppError>,
        opened: AtomicUsize,
        released: AtomicUsize,
    }

    #[async_trait]
    impl Camera for FakeCamera {
        async fn open(&self) -> Result<()> {
            if let Some(err) = &self.open_error {
                return Err(err.clone());
            }
            self.opened.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn next_payload(&self) -> Result<String> {
            let payload = self.payload.lock().take();
            match payload {
                Some(result) => result,
                None => std::future::pending().await,
            }
        }

        fn release(&self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_scan_strips_scheme_and_params() {
        let camera = FakeCamera {
            payload: Mutex::new(Some(Ok("ethereum:0xABC123@1".to_string()))),
            ..Default::default()
        };
        let (_tx, rx) = oneshot::channel();

        let outcome = scan(&camera, rx).await.unwrap();
        assert_eq!(outcome, ScanOutcome::Scanned("0xABC123".to_string()));
        assert_eq!(camera.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancel_releases_camera() {
        let camera = FakeCamera::default();
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        assert_eq!(scan(&camera, rx).await.unwrap(), ScanOutcome::Cancelled);
        assert_eq!(camera.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_dropped_scan_releases_camera() {
        let camera = FakeCamera::default();
        let (_tx, rx) = oneshot::channel();

        let scanning = scan(&camera, rx);
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), scanning).await;
        assert!(timed_out.is_err());
        assert_eq!(camera.opened.load(Ordering::SeqCst), 1);
        assert_eq!(camera.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_camera_error_releases_camera() {
        let camera = FakeCamera {
            payload: Mutex::new(Some(Err(AppError::Internal("decoder crashed".to_string())))),
            ..Default::default()
        };
        let (_tx, rx) = oneshot::channel();

        let err = scan(&camera, rx).await.unwrap_err();
        assert!(matches!(err, AppError::Camera(_)));
        assert_eq!(camera.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_open_failure_does_not_release() {
        let camera = FakeCamera {
            open_error: Some(AppError::Camera("Permission denied".to_string())),
            ..Default::default()
        };
        let (_tx, rx) = oneshot::channel();

        let err = scan(&camera, rx).await.unwrap_err();
        assert_eq!(err, AppError::Camera("Permission denied".to_string()));
        assert_eq!(camera.released.load(Ordering::SeqCst), 0);
    }
}
