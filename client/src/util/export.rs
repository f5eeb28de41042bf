//! Copy the visualization to the clipboard as a PNG image.
//!
//! The export is modeled as a port, [`SceneExporter`], so the calculator can
//! be exercised without a browser. [`ClipboardExporter`] is the browser
//! implementation: it paints the scene onto an off-screen `<canvas>` at
//! [`EXPORT_SCALE`], encodes it as PNG and writes a `ClipboardItem`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ExportError`]. [`run_export`] is the boundary:
//! it logs the error and folds it into [`ExportStatus::Failed`], so a failed
//! copy never disturbs the rest of the form.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::future::Future;

#[cfg(feature = "csr")]
use canvas::consts::EXPORT_SCALE;
use canvas::scene::Scene;

use crate::state::session::ExportStatus;

/// Error returned by a [`SceneExporter`].
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// No `window`/`document` (not running in a browser).
    #[error("browser window is not available")]
    NoWindow,
    /// `navigator.clipboard` is missing, e.g. on an insecure origin.
    #[error("clipboard API is not available")]
    ClipboardUnavailable,
    /// Creating the off-screen canvas or drawing onto it failed.
    #[error("failed to render visualization: {0}")]
    Render(String),
    /// The canvas could not be encoded as a PNG blob.
    #[error("failed to encode visualization as PNG: {0}")]
    Encode(String),
    /// The browser rejected the clipboard write (permissions, focus).
    #[error("clipboard write was rejected: {0}")]
    ClipboardWrite(String),
}

/// Capability to place an image of a scene on the clipboard.
pub trait SceneExporter {
    fn export(&self, scene: &Scene) -> impl Future<Output = Result<(), ExportError>>;
}

/// Run one export and translate the outcome into an [`ExportStatus`].
pub async fn run_export<E: SceneExporter>(exporter: &E, scene: &Scene) -> ExportStatus {
    match exporter.export(scene).await {
        Ok(()) => {
            log::info!("visualization copied to clipboard");
            ExportStatus::Copied
        }
        Err(e) => {
            log::error!("failed to copy visualization: {e}");
            ExportStatus::Failed(e.to_string())
        }
    }
}

/// Browser clipboard exporter.
///
/// Outside the browser (`csr` disabled) every export fails with
/// [`ExportError::NoWindow`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ClipboardExporter;

impl SceneExporter for ClipboardExporter {
    fn export(&self, scene: &Scene) -> impl Future<Output = Result<(), ExportError>> {
        let scene = scene.clone();
        async move {
            #[cfg(feature = "csr")]
            {
                browser::copy_scene(&scene).await
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = scene;
                Err(ExportError::NoWindow)
            }
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use js_sys::{Array, Object, Promise, Reflect};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, CanvasRenderingContext2d, ClipboardItem, HtmlCanvasElement};

    use super::{EXPORT_SCALE, ExportError, Scene};

    const PNG_MIME: &str = "image/png";

    pub(super) async fn copy_scene(scene: &Scene) -> Result<(), ExportError> {
        let window = web_sys::window().ok_or(ExportError::NoWindow)?;
        let document = window.document().ok_or(ExportError::NoWindow)?;
        let clipboard = window.navigator().clipboard().ok_or(ExportError::ClipboardUnavailable)?;

        let canvas = document
            .create_element("canvas")
            .map_err(render_err)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ExportError::Render("created element is not a canvas".to_owned()))?;
        paint(&canvas, scene)?;

        let blob = canvas_to_png(&canvas).await?;
        let record = Object::new();
        Reflect::set(&record, &JsValue::from_str(PNG_MIME), &blob).map_err(encode_err)?;
        let item = ClipboardItem::new_with_record_from_str_to_blob_promise(&record).map_err(write_err)?;

        JsFuture::from(clipboard.write(&Array::of1(&item)))
            .await
            .map_err(write_err)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn paint(canvas: &HtmlCanvasElement, scene: &Scene) -> Result<(), ExportError> {
        let layout = scene.layout();
        canvas.set_width((layout.width * EXPORT_SCALE).round() as u32);
        canvas.set_height((layout.height * EXPORT_SCALE).round() as u32);

        let ctx = canvas
            .get_context("2d")
            .map_err(render_err)?
            .ok_or_else(|| ExportError::Render("2d context unavailable".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ExportError::Render("unexpected context type".to_owned()))?;
        canvas::render::draw(&ctx, scene, EXPORT_SCALE).map_err(render_err)
    }

    async fn canvas_to_png(canvas: &HtmlCanvasElement) -> Result<Blob, ExportError> {
        let promise = Promise::new(&mut |resolve, reject| {
            if let Err(err) = canvas.to_blob(&resolve) {
                let _ = reject.call1(&JsValue::NULL, &err);
            }
        });
        // `toBlob` hands back `null` when the canvas cannot be encoded.
        JsFuture::from(promise)
            .await
            .map_err(encode_err)?
            .dyn_into::<Blob>()
            .map_err(|_| ExportError::Encode("canvas produced no image".to_owned()))
    }

    fn render_err(err: JsValue) -> ExportError {
        ExportError::Render(format!("{err:?}"))
    }

    fn encode_err(err: JsValue) -> ExportError {
        ExportError::Encode(format!("{err:?}"))
    }

    fn write_err(err: JsValue) -> ExportError {
        ExportError::ClipboardWrite(format!("{err:?}"))
    }
}
