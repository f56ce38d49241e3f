//! # Live Preview
//!
//! A [`PreviewSession`] owns the draw-handler and timer registrations a
//! host hands out for an on-screen preview, and releases both when it is
//! dropped, whichever way the session ends.
//!
//! Frames are illustrative: one center-line per target edge, placed at the
//! edge midpoint with mid-range radius and depth. Nothing here writes to
//! the edited mesh.

use crate::error::HostError;
use crate::generate::{resolve_edges, IcicleInstance, PathGenerator};
use crate::host::{EditHost, HostState};
use crate::settings::IcicleSettings;
use config::constants::PREVIEW_REFRESH_MS;
use glam::{DMat4, DVec3};
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Registration id of a draw callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawHandle(pub u64);

/// Registration id of a redraw timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Display-side collaborator that schedules preview redraws.
pub trait PreviewHost {
    /// Registers the viewport draw callback.
    fn add_draw_handler(&mut self) -> Result<DrawHandle, HostError>;

    /// Unregisters a draw callback.
    fn remove_draw_handler(&mut self, handle: DrawHandle);

    /// Starts a repeating redraw timer.
    fn add_timer(&mut self, interval: Duration) -> Result<TimerHandle, HostError>;

    /// Stops a redraw timer.
    fn remove_timer(&mut self, handle: TimerHandle);
}

/// A running preview.
///
/// # Example
///
/// ```rust
/// use icicle_mesh::preview::{DrawHandle, PreviewHost, PreviewSession, TimerHandle};
/// use icicle_mesh::{EditableMesh, HostError, IcicleSettings};
/// use glam::DVec3;
/// use rand::SeedableRng;
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct Viewport {
///     live: usize,
/// }
///
/// impl PreviewHost for Viewport {
///     fn add_draw_handler(&mut self) -> Result<DrawHandle, HostError> {
///         self.live += 1;
///         Ok(DrawHandle(1))
///     }
///     fn remove_draw_handler(&mut self, _: DrawHandle) {
///         self.live -= 1;
///     }
///     fn add_timer(&mut self, _: Duration) -> Result<TimerHandle, HostError> {
///         self.live += 1;
///         Ok(TimerHandle(2))
///     }
///     fn remove_timer(&mut self, _: TimerHandle) {
///         self.live -= 1;
///     }
/// }
///
/// let mut mesh = EditableMesh::new();
/// let a = mesh.add_vertex(DVec3::new(0.0, 0.0, 2.0));
/// let b = mesh.add_vertex(DVec3::new(1.0, 0.0, 2.0));
/// mesh.add_edge(a, b, true);
///
/// let mut viewport = Viewport::default();
/// {
///     let session = PreviewSession::start(&mut viewport)?;
///     let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///     let lines = session.frame(&mesh, &IcicleSettings::default(), &mut rng);
///     assert_eq!(lines.len(), 1);
///     assert_eq!(lines[0].len(), 13);
/// }
/// // both registrations were released when the session dropped
/// assert_eq!(viewport.live, 0);
/// # Ok::<(), HostError>(())
/// ```
pub struct PreviewSession<'h, P: PreviewHost + ?Sized> {
    host: &'h mut P,
    draw: Option<DrawHandle>,
    timer: Option<TimerHandle>,
}

impl<'h, P: PreviewHost + ?Sized> PreviewSession<'h, P> {
    /// Registers a draw callback and a redraw timer on `host`.
    ///
    /// # Errors
    ///
    /// Returns the host's error if either registration fails. A draw
    /// callback registered before a failing timer is released again.
    pub fn start(host: &'h mut P) -> Result<Self, HostError> {
        let draw = host.add_draw_handler()?;
        let mut session = Self {
            host,
            draw: Some(draw),
            timer: None,
        };
        let interval = Duration::from_millis(PREVIEW_REFRESH_MS);
        session.timer = Some(session.host.add_timer(interval)?);
        debug!(?draw, "preview started");
        Ok(session)
    }

    /// Whether both registrations are held.
    pub fn is_active(&self) -> bool {
        self.draw.is_some() && self.timer.is_some()
    }

    /// Builds the polylines to draw for the current settings.
    ///
    /// Returns no lines unless `source` is in edit mode. Points are in
    /// world space.
    pub fn frame<H, R>(&self, source: &H, settings: &IcicleSettings, rng: &mut R) -> Vec<Vec<DVec3>>
    where
        H: EditHost + ?Sized,
        R: Rng + ?Sized,
    {
        if source.state() != HostState::Edit {
            return Vec::new();
        }

        let paths = PathGenerator::new(settings, DMat4::IDENTITY);
        let radius = (settings.min_rad + settings.max_rad) * 0.5;
        let depth = (settings.min_depth + settings.max_depth) * 0.5;

        resolve_edges(source, settings.apply_to)
            .into_iter()
            .filter(|e| settings.edge_filter.accepts(e, settings.min_rad))
            .map(|edge| {
                let instance = IcicleInstance {
                    base: edge.midpoint(),
                    radius,
                    depth,
                };
                paths
                    .generate(&instance, rng)
                    .into_iter()
                    .map(|p| p.center)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Ends the session now.
    pub fn close(self) {}
}

impl<P: PreviewHost + ?Sized> Drop for PreviewSession<'_, P> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.host.remove_timer(timer);
        }
        if let Some(draw) = self.draw.take() {
            self.host.remove_draw_handler(draw);
        }
        debug!("preview stopped");
    }
}
