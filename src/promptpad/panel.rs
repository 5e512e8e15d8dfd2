//! Side panel visibility.
//!
//! Two states, [`PanelState::Open`] (initial) and [`PanelState::Collapsed`],
//! switched only by the user through the two panel triggers. Each transition
//! produces a [`PanelView`] for the surface to apply.
//!
//! Opening leaves both triggers visible, while collapsing hides the collapse
//! trigger. The asymmetry is the current user-visible behavior and is kept.

/// Horizontal offset of the panel when collapsed, in pixels.
pub const COLLAPSED_OFFSET_PX: i32 = -420;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Open,
    Collapsed,
}

/// What the surface should show for the panel and its triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView {
    pub offset_px: i32,
    pub open_trigger_visible: bool,
    pub collapse_trigger_visible: bool,
}

impl PanelView {
    /// CSS transform for the panel position.
    pub fn transform(&self) -> String {
        if self.offset_px == 0 {
            "translateX(0)".to_string()
        } else {
            format!("translateX({}px)", self.offset_px)
        }
    }
}

#[derive(Debug, Default)]
pub struct Panel {
    state: PanelState,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn view(&self) -> PanelView {
        match self.state {
            PanelState::Open => PanelView {
                offset_px: 0,
                open_trigger_visible: true,
                collapse_trigger_visible: true,
            },
            PanelState::Collapsed => PanelView {
                offset_px: COLLAPSED_OFFSET_PX,
                open_trigger_visible: true,
                collapse_trigger_visible: false,
            },
        }
    }

    pub fn open(&mut self) -> PanelView {
        self.state = PanelState::Open;
        self.view()
    }

    pub fn collapse(&mut self) -> PanelView {
        self.state = PanelState::Collapsed;
        self.view()
    }
}
