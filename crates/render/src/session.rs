use demography::dataset::DemographicDataset;
use demography::tooltip::TooltipPayload;
use foundation::color::Rgb;
use foundation::time::Time;
use formats::boundaries::BoundarySet;
use interaction::{Effect, InputEvent, InteractionController, ProjectionState, ViewMode};
use projection::{Projector, path_for};
use runtime::{Event, EventBus};
use symbology::{ColorScale, Metric, NO_DATA, ScaleKind, ramp};

use crate::detail::DetailView;
use crate::paint::{LegendSpec, OutlineCircle, PaintedFeature, ScenePaint};
use crate::playback::YearAnimator;
use crate::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub metric: Metric,
    /// Starting year; `None` selects the dataset's latest year.
    pub year: Option<i32>,
    pub scale_kind: ScaleKind,
    pub flag_base_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            metric: Metric::Population,
            year: None,
            scale_kind: ScaleKind::Linear,
            flag_base_path: "img/flags".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No country rows with a parseable year: nothing can render.
    EmptyDataset,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::EmptyDataset => write!(f, "demographic dataset has no country rows"),
        }
    }
}

impl std::error::Error for SessionError {}

/// What one `advance` call changed; tells the host which repaint it owes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AdvanceOutcome {
    /// Auto-rotation moved: full path recompute due.
    pub rotated: bool,
    /// Playback advanced the year: incremental color refresh due.
    pub years_advanced: u32,
    /// Playback hit the range end and stopped itself.
    pub playback_finished: bool,
}

/// The render lifecycle root.
///
/// Replaces the source's ambient module globals (current year, mode,
/// rotation, zoom, cached datasets) with one object of documented
/// lifecycle: `init` once with both datasets, `render`/`refresh_colors`
/// per frame, `dispose` at teardown. Both datasets are cached at init and
/// never reloaded. The interaction controller inside is the sole owner of
/// the live [`ProjectionState`].
#[derive(Debug)]
pub struct RenderSession {
    boundaries: BoundarySet,
    dataset: DemographicDataset,
    viewport: Viewport,
    controller: InteractionController,
    metric: Metric,
    scale_kind: ScaleKind,
    year: i32,
    min_year: i32,
    max_year: i32,
    playback: YearAnimator,
    detail: Option<(String, String)>,
    flag_base_path: String,
    bus: EventBus,
}

impl RenderSession {
    /// Fails when the demographic dataset has no usable rows; a globe
    /// without data is a load error, not a partial render.
    pub fn init(
        boundaries: BoundarySet,
        dataset: DemographicDataset,
        viewport: Viewport,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        let (min_year, max_year) = dataset.year_range().ok_or(SessionError::EmptyDataset)?;
        let year = config.year.unwrap_or(max_year).clamp(min_year, max_year);

        let state = ProjectionState::new(ViewMode::ThreeD, viewport.center());
        let default_scale =
            Projector::default_scale(state.mode.projection(), viewport.radius());
        let controller = InteractionController::new(state, default_scale);

        let mut bus = EventBus::new();
        bus.emit("session", "init");

        Ok(Self {
            boundaries,
            dataset,
            viewport,
            controller,
            metric: config.metric,
            scale_kind: config.scale_kind,
            year,
            min_year,
            max_year,
            playback: YearAnimator::new(),
            detail: None,
            flag_base_path: config.flag_base_path,
            bus,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn year_range(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn mode(&self) -> ViewMode {
        self.controller.mode()
    }

    pub fn state(&self) -> &ProjectionState {
        self.controller.state()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn detail_selection(&self) -> Option<&(String, String)> {
        self.detail.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Ordered diagnostic trace of driver transitions.
    pub fn events(&self) -> &[Event] {
        self.bus.events()
    }

    /// One full render pass.
    ///
    /// Guaranteed sequence: current-year metrics are derived from the
    /// cached dataset, the color scale is rebuilt, a transient projector
    /// is configured from the live interaction state, every feature gets
    /// a path and a fill, and (3d, no detail selection) the auto-rotate
    /// ticker is restarted.
    pub fn render(&mut self, now: Time) -> ScenePaint {
        self.controller.begin_render_pass(self.default_scale());

        let slice = self.dataset.slice_for_year(self.year);
        let scale = ColorScale::build(
            self.metric,
            &slice.values_for(self.metric),
            self.scale_kind,
        );

        let state = self.controller.state().clone();
        let scale_px = self.controller.current_scale();
        let projector =
            Projector::configure(state.mode.projection(), scale_px, state.rotation, state.center);

        let features = self
            .boundaries
            .features
            .iter()
            .map(|feature| {
                let fill = match slice.metric_for(&feature.code) {
                    Some(metric) => scale.color(metric.value_for(self.metric)),
                    None => NO_DATA,
                };
                PaintedFeature {
                    code: feature.code.clone(),
                    name: feature.name.clone(),
                    path: path_for(&projector, feature.geometry.rings()),
                    fill,
                }
            })
            .collect();

        let outline = (state.mode == ViewMode::ThreeD).then(|| OutlineCircle {
            center: state.center,
            radius: scale_px,
        });

        let legend = LegendSpec {
            colors: ramp(self.metric).to_vec(),
            domain: scale.domain(),
        };

        self.bus.emit("render", "full pass");
        self.controller.start_auto_rotate(now, &mut self.bus);

        ScenePaint {
            mode: state.mode,
            outline,
            features,
            legend,
        }
    }

    /// The lightweight incremental path for metric/year changes: rebuild
    /// metrics and the color scale, return new fills keyed by feature
    /// code. Projection and paths are untouched.
    pub fn refresh_colors(&mut self, now: Time) -> Vec<(String, Rgb)> {
        self.controller.stop_auto_rotate(&mut self.bus);

        let slice = self.dataset.slice_for_year(self.year);
        let scale = ColorScale::build(
            self.metric,
            &slice.values_for(self.metric),
            self.scale_kind,
        );

        let fills = self
            .boundaries
            .features
            .iter()
            .map(|feature| {
                let fill = match slice.metric_for(&feature.code) {
                    Some(metric) => scale.color(metric.value_for(self.metric)),
                    None => NO_DATA,
                };
                (feature.code.clone(), fill)
            })
            .collect();

        self.bus.emit("render", "color refresh");
        self.controller.start_auto_rotate(now, &mut self.bus);
        fills
    }

    /// Routes a gesture/control event through the interaction controller
    /// and applies session-level consequences (viewport updates on
    /// resize). Detail opening stays host-driven via
    /// [`Effect::DetailOpen`] and [`RenderSession::open_detail`].
    pub fn handle_input(&mut self, event: InputEvent, now: Time) -> Vec<Effect> {
        let effects = self.controller.handle(event, now, &mut self.bus);

        for effect in &effects {
            if let Effect::RebuildSurface { width, height } = effect {
                self.viewport = Viewport::new(*width, *height);
                self.controller
                    .reconfigure(self.default_scale(), self.viewport.center());
            }
        }

        effects
    }

    /// Drives both timers; call once per host frame.
    pub fn advance(&mut self, now: Time) -> AdvanceOutcome {
        let mut outcome = AdvanceOutcome {
            rotated: self.controller.advance(now),
            ..AdvanceOutcome::default()
        };

        let ticks = self.playback.poll(now);
        for _ in 0..ticks {
            if self.year < self.max_year {
                self.year += 1;
                outcome.years_advanced += 1;
            } else {
                self.playback.pause();
                outcome.playback_finished = true;
                self.bus.emit("playback", "auto-stop at range end");
                break;
            }
        }

        outcome
    }

    pub fn play(&mut self, now: Time) {
        self.playback.play(now);
        self.bus.emit("playback", "started");
    }

    pub fn pause(&mut self) {
        self.playback.pause();
        self.bus.emit("playback", "paused");
    }

    /// Stops playback if running and jumps back to the latest year.
    pub fn reset_playback(&mut self) {
        if self.playback.is_playing() {
            self.playback.pause();
        }
        self.year = self.max_year;
        self.bus.emit("playback", "reset");
    }

    /// Year slider; clamped to the dataset's range.
    pub fn set_year(&mut self, year: i32) {
        self.year = year.clamp(self.min_year, self.max_year);
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
    }

    /// Flips 3d/2d. The zoom resets with the mode; the next render pass
    /// derives the new mode's default scale from the current viewport.
    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.controller.toggle_mode(&mut self.bus)
    }

    /// Opens the detail view for a clicked country. `None` (no data for
    /// that code) leaves the session state untouched.
    pub fn open_detail(&mut self, code: &str, name: &str) -> Option<DetailView> {
        let view = DetailView::build(&self.dataset, code, name, &self.flag_base_path)?;
        self.detail = Some((code.to_string(), name.to_string()));
        self.controller.set_detail_active(true, &mut self.bus);
        Some(view)
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.controller.set_detail_active(false, &mut self.bus);
    }

    /// Hover payload for a feature, from the current year's metrics.
    pub fn tooltip_for(&self, code: &str) -> TooltipPayload {
        let slice = self.dataset.slice_for_year(self.year);
        let name = self
            .boundaries
            .feature(code)
            .map(|f| f.name.as_str())
            .unwrap_or_default();
        TooltipPayload::build(name, code, slice.metric_for(code))
    }

    pub fn flag_path_for(&self, code: &str) -> String {
        demography::flags::flag_path(&self.flag_base_path, code)
    }

    /// Stops every timer. The session is inert afterwards; rendering
    /// again is allowed but nothing fires until restarted.
    pub fn dispose(&mut self) {
        self.controller.stop_auto_rotate(&mut self.bus);
        self.playback.pause();
        self.bus.emit("session", "disposed");
    }

    fn default_radius(&self) -> f64 {
        if self.detail.is_some() {
            self.viewport.detail_radius()
        } else {
            self.viewport.radius()
        }
    }

    fn default_scale(&self) -> f64 {
        Projector::default_scale(self.mode().projection(), self.default_radius())
    }
}
