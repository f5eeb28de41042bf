use std::cell::RefCell;

use futures::executor::block_on;
use market::MarketResult;

use super::*;

/// Records the scenes it receives and answers with a fixed outcome.
struct FakeExporter {
    fail_with: Option<fn() -> ExportError>,
    seen: RefCell<Vec<Scene>>,
}

impl FakeExporter {
    fn ok() -> Self {
        Self {
            fail_with: None,
            seen: RefCell::new(Vec::new()),
        }
    }

    fn failing(make: fn() -> ExportError) -> Self {
        Self {
            fail_with: Some(make),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl SceneExporter for FakeExporter {
    fn export(&self, scene: &Scene) -> impl Future<Output = Result<(), ExportError>> {
        self.seen.borrow_mut().push(scene.clone());
        let outcome = match self.fail_with {
            Some(make) => Err(make()),
            None => Ok(()),
        };
        async move { outcome }
    }
}

fn sample_scene() -> Scene {
    let result = MarketResult {
        tam: 5_000_000.0,
        sam: 1_000_000.0,
        som: 100_000.0,
    };
    Scene::build("Batteries", &result)
}

#[test]
fn run_export_success_reports_copied() {
    let exporter = FakeExporter::ok();
    let status = block_on(run_export(&exporter, &sample_scene()));
    assert_eq!(status, ExportStatus::Copied);
}

#[test]
fn run_export_passes_scene_through() {
    let exporter = FakeExporter::ok();
    let scene = sample_scene();
    block_on(run_export(&exporter, &scene));
    assert_eq!(exporter.seen.borrow().as_slice(), &[scene]);
}

#[test]
fn run_export_failure_reports_reason() {
    let exporter = FakeExporter::failing(|| ExportError::ClipboardWrite("NotAllowedError".to_owned()));
    let status = block_on(run_export(&exporter, &sample_scene()));
    assert_eq!(
        status,
        ExportStatus::Failed("clipboard write was rejected: NotAllowedError".to_owned())
    );
}

#[test]
fn run_export_missing_clipboard_is_a_failure() {
    let exporter = FakeExporter::failing(|| ExportError::ClipboardUnavailable);
    let status = block_on(run_export(&exporter, &sample_scene()));
    assert!(matches!(status, ExportStatus::Failed(_)));
    assert_eq!(status.notice(), Some("Failed to copy visualization. Please try again."));
}

#[test]
fn export_error_messages() {
    assert_eq!(ExportError::NoWindow.to_string(), "browser window is not available");
    assert_eq!(ExportError::ClipboardUnavailable.to_string(), "clipboard API is not available");
    assert_eq!(
        ExportError::Render("boom".to_owned()).to_string(),
        "failed to render visualization: boom"
    );
    assert_eq!(
        ExportError::Encode("null".to_owned()).to_string(),
        "failed to encode visualization as PNG: null"
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn clipboard_exporter_fails_outside_browser() {
    let status = block_on(run_export(&ClipboardExporter, &sample_scene()));
    assert_eq!(status, ExportStatus::Failed("browser window is not available".to_owned()));
}
