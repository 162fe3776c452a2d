//! Interactive image editing controller.
//!
//! [`ImageEditor`] owns the placement of one image inside a fixed viewport and
//! drives a [`RasterSurface`] and an [`OverlaySurface`] in response to pointer
//! events and editing calls.
//!
//! # Modes
//!
//! Pointer events are gated by the current [`EditorMode`]:
//!
//! - `Idle` ignores the pointer.
//! - `Cropping` draws a selection outline while the button is held and crops
//!   to it on release.
//! - `AwaitingMove` waits for a press on the image; leaving the image drops
//!   back to `Idle`.
//! - `Moving` drags the image until release or until the pointer leaves the
//!   surface.
//!
//! Every mode change goes through one setter that also updates the surface
//! cursor. Events that do not apply in the current mode are logged at debug
//! level and otherwise ignored.
//!
//! # Rebuilds
//!
//! Crop, rotate, scale and colour commits build a new raster. The new
//! [`Placement`] is assembled completely before it replaces the old one, so a
//! failed commit leaves the previous state intact. All mutation goes through
//! `&mut self`, which rules out overlapping rebuilds.

mod error;
mod history;
mod mode;
mod options;
mod placement;

pub use error::EditError;
pub use history::HistoryLog;
pub use mode::{Cursor, EditorMode};
pub use options::{CropPolicy, EditorOptions, OutlineStyle};
pub use placement::{Placement, PlacementSnapshot};

use tracing::{debug, info, warn};

use crate::adjustments::apply_color_params;
use crate::decode::decode_image;
use crate::encode::ExportFormat;
use crate::geometry::{center, fit_to_bounds, rotated_corners, Bounds, PixelRect, Point, Rect};
use crate::raster::{Raster, RasterError};
use crate::surface::{OverlaySurface, RasterSurface};
use crate::transform::{resize, DrawTransform, FilterType};
use crate::ColorParams;

/// Editing session for one image in one viewport.
pub struct ImageEditor<S, O> {
    surface: S,
    overlay: O,
    options: EditorOptions,
    viewport: Bounds,
    fit_bounds: Bounds,
    mode: EditorMode,
    placement: Placement,
    /// Pixels colour adjustments are computed from.
    baseline: Option<Raster>,
    /// Press position while a crop drag is in progress.
    crop_start: Option<Point>,
    /// Pointer offset from the image's top-left while moving.
    drag_offset: Option<Point>,
    history: HistoryLog,
    last_revision: u64,
}

impl<S: RasterSurface, O: OverlaySurface> ImageEditor<S, O> {
    /// Start a session: fit `source` to the fit bounds, centre it in the
    /// viewport and draw it.
    ///
    /// # Errors
    ///
    /// `InvalidViewport` if the viewport or fit bounds are empty or the
    /// surface size differs from the viewport, `Raster` if the source has
    /// no pixels.
    pub fn new(
        surface: S,
        overlay: O,
        source: Raster,
        options: EditorOptions,
    ) -> Result<Self, EditError> {
        options.validate()?;
        let (surface_width, surface_height) = surface.size();
        if (surface_width, surface_height) != (options.width, options.height) {
            return Err(EditError::InvalidViewport {
                width: surface_width as f64,
                height: surface_height as f64,
            });
        }
        if source.is_empty() {
            return Err(RasterError::Empty.into());
        }

        let viewport = options.viewport();
        let fit_bounds = options.effective_fit_bounds();
        let placement = fit_placement(source, &viewport, &fit_bounds, options.resample, 0.0, 0)?;

        let mut editor = Self {
            surface,
            overlay,
            history: HistoryLog::new(options.history_limit),
            options,
            viewport,
            fit_bounds,
            mode: EditorMode::Idle,
            placement,
            baseline: None,
            crop_start: None,
            drag_offset: None,
            last_revision: 0,
        };
        editor.surface.set_cursor(editor.mode.cursor());
        editor.redraw();
        editor.history.record(editor.placement.snapshot());

        info!(
            width = editor.placement.width,
            height = editor.placement.height,
            fit_scale = editor.placement.fit_scale,
            "editor initialised"
        );
        Ok(editor)
    }

    /// Decode `bytes` and start a session with the result.
    pub fn from_encoded(
        surface: S,
        overlay: O,
        bytes: &[u8],
        options: EditorOptions,
    ) -> Result<Self, EditError> {
        let source = decode_image(bytes)?;
        Self::new(surface, overlay, source, options)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn cursor(&self) -> Cursor {
        self.mode.cursor()
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn snapshot(&self) -> PlacementSnapshot {
        self.placement.snapshot()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    pub fn viewport(&self) -> Bounds {
        self.viewport
    }

    pub fn fit_bounds(&self) -> Bounds {
        self.fit_bounds
    }

    /// Whether a colour baseline has been captured for the current image.
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }

    // ------------------------------------------------------------------
    // Modes
    // ------------------------------------------------------------------

    /// Start a crop selection. Calling it again while cropping cancels.
    pub fn enter_crop_mode(&mut self) {
        match self.mode {
            EditorMode::Idle => {
                self.crop_start = None;
                self.set_mode(EditorMode::Cropping);
            }
            EditorMode::Cropping => {
                self.crop_start = None;
                self.overlay.clear();
                self.set_mode(EditorMode::Idle);
            }
            _ => self.ignore("enter_crop_mode"),
        }
    }

    /// Wait for a press on the image to start dragging it. Calling it again
    /// before the press cancels.
    pub fn enter_move_mode(&mut self) {
        match self.mode {
            EditorMode::Idle => self.set_mode(EditorMode::AwaitingMove),
            EditorMode::AwaitingMove => self.set_mode(EditorMode::Idle),
            _ => self.ignore("enter_move_mode"),
        }
    }

    // ------------------------------------------------------------------
    // Pointer events
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        match self.mode {
            EditorMode::Cropping => self.crop_start = Some(p),
            EditorMode::AwaitingMove if self.placement.contains(p) => {
                self.drag_offset = Some(Point::new(x - self.placement.x, y - self.placement.y));
                self.set_mode(EditorMode::Moving);
            }
            _ => self.ignore("pointer_down"),
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let p = Point::new(x, y);
        match self.mode {
            EditorMode::Cropping => match self.crop_start {
                Some(start) => self.overlay.draw_quad([
                    start,
                    Point::new(start.x, p.y),
                    p,
                    Point::new(p.x, start.y),
                ]),
                None => self.ignore("pointer_move"),
            },
            EditorMode::AwaitingMove => {
                if self.placement.contains(p) {
                    self.set_mode(EditorMode::AwaitingMove);
                } else {
                    self.set_mode(EditorMode::Idle);
                }
            }
            EditorMode::Moving => {
                if let Some(offset) = self.drag_offset {
                    self.move_to(x - offset.x, y - offset.y);
                }
            }
            EditorMode::Idle | EditorMode::Scaling => self.ignore("pointer_move"),
        }
    }

    /// Release the pointer. In crop mode this commits the selection.
    ///
    /// # Errors
    ///
    /// `DegenerateRegion` when the selection is smaller than one pixel, or
    /// is reversed under [`CropPolicy::Reject`]. The placement is unchanged
    /// and the editor returns to `Idle`.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> Result<(), EditError> {
        let p = Point::new(x, y);
        match self.mode {
            EditorMode::Cropping => {
                let Some(start) = self.crop_start.take() else {
                    self.ignore("pointer_up");
                    return Ok(());
                };
                self.overlay.clear();
                self.set_mode(EditorMode::Idle);
                self.commit_crop(start, p)
            }
            EditorMode::Moving => {
                if let Some(offset) = self.drag_offset.take() {
                    self.move_to(x - offset.x, y - offset.y);
                }
                self.finish_move();
                Ok(())
            }
            _ => {
                self.ignore("pointer_up");
                Ok(())
            }
        }
    }

    /// The pointer left the surface.
    pub fn pointer_leave(&mut self) {
        match self.mode {
            EditorMode::Moving => {
                self.drag_offset = None;
                self.finish_move();
            }
            EditorMode::AwaitingMove => self.set_mode(EditorMode::Idle),
            _ => self.ignore("pointer_leave"),
        }
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    /// Rotate to an absolute `angle` in degrees about the image centre.
    ///
    /// A preview only redraws. A commit captures the rotated image's
    /// bounding box from the surface as the new raster.
    pub fn rotate(&mut self, angle: f64, commit: bool) -> Result<(), EditError> {
        if !angle.is_finite() {
            self.ignore("rotate");
            return Ok(());
        }

        let delta = (angle - self.placement.angle).to_radians();
        let rect = self.placement.rect();
        self.surface.clear();
        self.surface.draw_image(
            &self.placement.raster,
            rect,
            &DrawTransform::rotation(rect.center(), delta),
        );
        if !commit {
            debug!(angle, "rotate preview");
            return Ok(());
        }

        let bbox = rotated_corners(rect.x, rect.y, rect.width, rect.height, delta).bounding_rect();
        let region = PixelRect::from_rect(&bbox);
        if region.is_empty() {
            warn!(width = bbox.width, height = bbox.height, "rotation produced an empty region");
            self.redraw();
            return Err(EditError::DegenerateRegion {
                width: bbox.width,
                height: bbox.height,
            });
        }

        let captured = self.surface.get_pixels(region);
        let revision = self.next_revision();
        let mut next = self.placement.with_raster(captured, revision);
        next.x = region.x as f64;
        next.y = region.y as f64;
        next.width = region.width as f64;
        next.height = region.height as f64;
        next.angle = angle;
        next.color = ColorParams::default();
        self.install(next, false);

        info!(angle, width = region.width, height = region.height, "rotation committed");
        Ok(())
    }

    /// Zoom to an absolute `factor` about the image centre.
    ///
    /// A commit rebuilds the raster at the new whole-pixel size, keeping the
    /// centre where it was.
    pub fn scale(&mut self, factor: f64, commit: bool) -> Result<(), EditError> {
        let rect = self.placement.rect();
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "rejected scale factor");
            return Err(EditError::DegenerateRegion {
                width: rect.width * factor,
                height: rect.height * factor,
            });
        }

        let relative = factor / self.placement.scale;
        let pivot = rect.center();
        if !commit {
            self.surface.clear();
            self.surface.draw_image(
                &self.placement.raster,
                rect,
                &DrawTransform::scaling(pivot, relative),
            );
            debug!(factor, "scale preview");
            return Ok(());
        }

        let width = (rect.width * relative).round();
        let height = (rect.height * relative).round();
        if width < 1.0 || height < 1.0 {
            warn!(width, height, "scale would leave no pixels");
            return Err(EditError::DegenerateRegion { width, height });
        }

        let resized = resize(
            &self.placement.raster,
            width as u32,
            height as u32,
            self.options.resample,
        )?;
        let revision = self.next_revision();
        let mut next = self.placement.with_raster(resized, revision);
        next.x = pivot.x - width / 2.0;
        next.y = pivot.y - height / 2.0;
        next.width = width;
        next.height = height;
        next.scale = factor;
        next.color = ColorParams::default();
        self.install(next, false);

        info!(factor, width, height, "scale committed");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Colour
    // ------------------------------------------------------------------

    pub fn adjust_brightness(&mut self, value: f64, commit: bool) -> Result<(), EditError> {
        self.adjust_color(commit, |c| c.brightness = value)
    }

    pub fn adjust_contrast(&mut self, value: f64, commit: bool) -> Result<(), EditError> {
        self.adjust_color(commit, |c| c.contrast = value)
    }

    pub fn adjust_saturation(&mut self, value: f64, commit: bool) -> Result<(), EditError> {
        self.adjust_color(commit, |c| c.saturation = value)
    }

    pub fn adjust_rgb_balance(
        &mut self,
        r: i32,
        g: i32,
        b: i32,
        commit: bool,
    ) -> Result<(), EditError> {
        self.adjust_color(commit, |c| c.rgb_offset = crate::RgbOffset::new(r, g, b))
    }

    /// Toggle black and white. Always committed.
    pub fn set_grayscale(&mut self, enabled: bool) -> Result<(), EditError> {
        self.adjust_color(true, |c| c.grayscale = enabled)
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Encode what is currently on the surface.
    pub fn export_encoded_image(&self, format: ExportFormat) -> Result<Vec<u8>, EditError> {
        Ok(self.surface.export(format)?)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
        self.surface.set_cursor(mode.cursor());
    }

    fn ignore(&self, event: &'static str) {
        let err = EditError::InvalidModeTransition {
            mode: self.mode,
            event,
        };
        debug!(%err, "ignored pointer or mode event");
    }

    fn next_revision(&mut self) -> u64 {
        self.last_revision += 1;
        self.last_revision
    }

    fn redraw(&mut self) {
        self.surface.clear();
        self.surface.draw_image(
            &self.placement.raster,
            self.placement.rect(),
            &DrawTransform::identity(),
        );
    }

    /// Swap in a rebuilt placement, redraw and record it.
    fn install(&mut self, placement: Placement, keep_baseline: bool) {
        self.placement = placement;
        if !keep_baseline {
            self.baseline = None;
        }
        self.redraw();
        self.history.record(self.placement.snapshot());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.placement.x = x;
        self.placement.y = y;
        self.redraw();
    }

    fn finish_move(&mut self) {
        self.set_mode(EditorMode::Idle);
        self.history.record(self.placement.snapshot());
        debug!(x = self.placement.x, y = self.placement.y, "move finished");
    }

    fn commit_crop(&mut self, start: Point, end: Point) -> Result<(), EditError> {
        let raw = Rect::from_corners(start, end);
        let rect = match self.options.crop_policy {
            CropPolicy::Reject if raw.is_reversed() => {
                warn!(width = raw.width, height = raw.height, "reversed crop rejected");
                return Err(EditError::DegenerateRegion {
                    width: raw.width,
                    height: raw.height,
                });
            }
            CropPolicy::Reject => raw,
            CropPolicy::Normalize => raw.normalized(),
        };

        let region = PixelRect::from_rect(&rect);
        if region.is_empty() {
            warn!(width = rect.width, height = rect.height, "crop region too small");
            return Err(EditError::DegenerateRegion {
                width: rect.width,
                height: rect.height,
            });
        }

        let captured = self.surface.get_pixels(region);
        let revision = self.next_revision();
        let next = fit_placement(
            captured,
            &self.viewport,
            &self.fit_bounds,
            self.options.resample,
            self.placement.angle,
            revision,
        )?;
        self.install(next, false);

        info!(
            x = region.x,
            y = region.y,
            width = region.width,
            height = region.height,
            "crop committed"
        );
        Ok(())
    }

    fn adjust_color(
        &mut self,
        commit: bool,
        update: impl FnOnce(&mut ColorParams),
    ) -> Result<(), EditError> {
        let mut params = self.placement.color;
        update(&mut params);

        let current = &self.placement.raster;
        let baseline = self.baseline.get_or_insert_with(|| current.clone());
        let adjusted = baseline.with_pixels(apply_color_params(&baseline.pixels, &params))?;

        if commit {
            let revision = self.next_revision();
            let mut next = self.placement.with_raster(adjusted, revision);
            next.color = params;
            self.install(next, true);
            info!(?params, "colour committed");
        } else {
            self.placement.color = params;
            self.surface.put_pixels(
                &adjusted,
                self.placement.x.round() as i64,
                self.placement.y.round() as i64,
            );
            debug!(?params, "colour preview");
        }
        Ok(())
    }
}

/// Fit `raster` into `fit_bounds`, resampling if it has to shrink, and
/// centre it in `viewport`.
fn fit_placement(
    raster: Raster,
    viewport: &Bounds,
    fit_bounds: &Bounds,
    filter: FilterType,
    angle: f64,
    revision: u64,
) -> Result<Placement, EditError> {
    let fit = fit_to_bounds(raster.width as f64, raster.height as f64, fit_bounds);
    let raster = if fit.scale == 1.0 {
        raster
    } else {
        let width = (fit.width.round() as u32).max(1);
        let height = (fit.height.round() as u32).max(1);
        resize(&raster, width, height, filter)?
    };
    let origin = center(viewport, fit.width, fit.height);

    Ok(Placement {
        raster,
        x: origin.x,
        y: origin.y,
        width: fit.width,
        height: fit.height,
        scale: 1.0,
        fit_scale: fit.scale,
        angle,
        color: ColorParams::default(),
        revision,
    })
}
