/// Typed gesture and control events, decoupled from whatever surface
/// produced them. The host translates raw pointer/wheel/resize callbacks
/// into these; all state mutation happens in one place,
/// [`crate::InteractionController::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer entered a feature.
    Hover { code: String },
    /// Pointer left the hovered feature.
    Unhover,
    /// Feature clicked; opens the detail view.
    Click { code: String, name: String },
    DragStart,
    /// Pointer moved while dragging; deltas in pixels.
    DragMove { dx: f64, dy: f64 },
    DragEnd,
    /// Cumulative zoom gesture factor relative to the render-pass scale.
    Zoom { factor: f64 },
    /// Viewport resize, after the host's debounce settled.
    ResizeSettled { width: f64, height: f64 },
}

/// What the host must do after an event was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Projection parameters changed: recompute paths and repaint.
    Repaint,
    /// Show the tooltip for a feature.
    TooltipShow { code: String },
    TooltipHide,
    /// Open the per-country detail view.
    DetailOpen { code: String, name: String },
    /// Tear down and rebuild the render surface at the new viewport.
    RebuildSurface { width: f64, height: f64 },
}
