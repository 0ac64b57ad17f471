use bevy::prelude::*;

use crate::engine::galaxy::parameters::GalaxyParameters;
use crate::engine::render::points_material::PointsMaterialDescriptor;
use crate::engine::scene::galaxy_scene::RegenerateGalaxy;
use constants::galaxy::{
    BRANCH_COUNT_RANGE, COUNT_RANGE, RADIUS_RANGE, RANDOMNESS_POWER_RANGE, RANDOMNESS_RANGE,
    SIZE_RANGE, SPIN_RANGE, TweakRange,
};

/// Enumeration of the fields adjustable from the keyboard panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweakField {
    Count,
    Size,
    BranchCount,
    Radius,
    Spin,
    Randomness,
    RandomnessPower,
}

pub const TWEAK_FIELDS: &[TweakField] = &[
    TweakField::Count,
    TweakField::Size,
    TweakField::BranchCount,
    TweakField::Radius,
    TweakField::Spin,
    TweakField::Randomness,
    TweakField::RandomnessPower,
];

impl TweakField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Size => "size",
            Self::BranchCount => "branches",
            Self::Radius => "radius",
            Self::Spin => "spin",
            Self::Randomness => "randomness",
            Self::RandomnessPower => "randomness power",
        }
    }

    pub fn range(self) -> &'static TweakRange {
        match self {
            Self::Count => &COUNT_RANGE,
            Self::Size => &SIZE_RANGE,
            Self::BranchCount => &BRANCH_COUNT_RANGE,
            Self::Radius => &RADIUS_RANGE,
            Self::Spin => &SPIN_RANGE,
            Self::Randomness => &RANDOMNESS_RANGE,
            Self::RandomnessPower => &RANDOMNESS_POWER_RANGE,
        }
    }

    fn is_integer(self) -> bool {
        matches!(self, Self::Count | Self::BranchCount)
    }

    fn read(self, params: &GalaxyParameters) -> f32 {
        match self {
            Self::Count => params.count as f32,
            Self::Size => params.size,
            Self::BranchCount => params.branch_count as f32,
            Self::Radius => params.radius,
            Self::Spin => params.spin,
            Self::Randomness => params.randomness,
            Self::RandomnessPower => params.randomness_power,
        }
    }

    fn write(self, params: &mut GalaxyParameters, value: f32) {
        match self {
            Self::Count => params.count = value.round() as u32,
            Self::Size => params.size = value,
            Self::BranchCount => params.branch_count = value.round() as u32,
            Self::Radius => params.radius = value,
            Self::Spin => params.spin = value,
            Self::Randomness => params.randomness = value,
            Self::RandomnessPower => params.randomness_power = value,
        }
    }
}

/// Panel state: selected field plus the pending (uncommitted) parameters.
///
/// Held adjustment keys edit the pending copy only; the committed parameters
/// and the regeneration they trigger wait for key release, so a continuous
/// adjustment costs a single rebuild.
#[derive(Resource)]
pub struct TweakPanel {
    pub selected: usize,
    pub pending: GalaxyParameters,
    pub dirty: bool,
}

impl Default for TweakPanel {
    fn default() -> Self {
        Self {
            selected: 0,
            pending: GalaxyParameters::default(),
            dirty: false,
        }
    }
}

impl TweakPanel {
    pub fn field(&self) -> TweakField {
        TWEAK_FIELDS[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % TWEAK_FIELDS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + TWEAK_FIELDS.len() - 1) % TWEAK_FIELDS.len();
    }

    /// Step the selected field, clamped to its configured range.
    pub fn adjust(&mut self, direction: f32) {
        let field = self.field();
        let range = field.range();
        let value =
            (field.read(&self.pending) + direction * range.step).clamp(range.min, range.max);
        field.write(&mut self.pending, value);
        self.dirty = true;
    }
}

/// Pick up externally applied parameters (preset load) so the panel edits
/// the values actually on screen.
pub fn sync_pending_parameters(params: Res<GalaxyParameters>, mut panel: ResMut<TweakPanel>) {
    if params.is_changed() && !panel.dirty {
        panel.pending = params.clone();
    }
}

/// Handle panel input: Tab cycles fields, held arrows edit the pending copy,
/// release commits and regenerates.
pub fn tweak_panel_input(
    mut panel: ResMut<TweakPanel>,
    mut params: ResMut<GalaxyParameters>,
    mut regenerate: EventWriter<RegenerateGalaxy>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.just_pressed(KeyCode::Tab) {
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            panel.select_previous();
        } else {
            panel.select_next();
        }
    }

    if keyboard.pressed(KeyCode::ArrowUp) {
        panel.adjust(1.0);
    }
    if keyboard.pressed(KeyCode::ArrowDown) {
        panel.adjust(-1.0);
    }

    // Commit on release, not per held-key repeat
    let released = keyboard.just_released(KeyCode::ArrowUp)
        || keyboard.just_released(KeyCode::ArrowDown);
    if released && panel.dirty {
        *params = panel.pending.clone();
        panel.dirty = false;
        regenerate.write(RegenerateGalaxy);
        info!(
            "Committed {} = {}",
            panel.field().label(),
            panel.field().read(&params)
        );
    }
}

/// Marker for the panel readout text node.
#[derive(Component)]
pub struct PanelText;

pub fn update_panel_text(
    panel: Res<TweakPanel>,
    descriptor: Res<PointsMaterialDescriptor>,
    mut query: Query<&mut Text, With<PanelText>>,
) {
    if !panel.is_changed() && !descriptor.is_changed() {
        return;
    }
    for mut text in &mut query {
        text.0 = render_panel(&panel, &descriptor);
    }
}

fn render_panel(panel: &TweakPanel, descriptor: &PointsMaterialDescriptor) -> String {
    let mut lines = vec![format!("blending: {:?}  [Z/X/C]", descriptor.blending)];
    for (index, field) in TWEAK_FIELDS.iter().enumerate() {
        let marker = if index == panel.selected { ">" } else { " " };
        let value = field.read(&panel.pending);
        if field.is_integer() {
            lines.push(format!("{marker} {}: {value:.0}", field.label()));
        } else {
            lines.push(format!("{marker} {}: {value:.2}", field.label()));
        }
    }
    lines.push("[Tab] field  [Up/Down] adjust".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_selection_wraps_both_ways() {
        let mut panel = TweakPanel::default();
        panel.select_previous();
        assert_eq!(panel.field(), TweakField::RandomnessPower);
        panel.select_next();
        assert_eq!(panel.field(), TweakField::Count);
    }

    #[test]
    fn adjustment_steps_by_the_field_step() {
        let mut panel = TweakPanel::default();
        panel.selected = TWEAK_FIELDS
            .iter()
            .position(|f| *f == TweakField::Radius)
            .unwrap();
        let before = panel.pending.radius;
        panel.adjust(1.0);
        assert!((panel.pending.radius - before - RADIUS_RANGE.step).abs() < 1e-6);
        assert!(panel.dirty);
    }

    #[test]
    fn adjustment_clamps_to_the_field_range() {
        let mut panel = TweakPanel::default();
        panel.pending.randomness = RANDOMNESS_RANGE.max;
        panel.selected = TWEAK_FIELDS
            .iter()
            .position(|f| *f == TweakField::Randomness)
            .unwrap();
        panel.adjust(1.0);
        assert_eq!(panel.pending.randomness, RANDOMNESS_RANGE.max);

        panel.pending.randomness = RANDOMNESS_RANGE.min;
        panel.adjust(-1.0);
        assert_eq!(panel.pending.randomness, RANDOMNESS_RANGE.min);
    }

    #[test]
    fn integer_fields_stay_integral() {
        let mut panel = TweakPanel::default();
        panel.selected = TWEAK_FIELDS
            .iter()
            .position(|f| *f == TweakField::BranchCount)
            .unwrap();
        panel.adjust(1.0);
        assert_eq!(
            panel.pending.branch_count,
            GalaxyParameters::default().branch_count + 1
        );
    }

    #[test]
    fn adjusted_count_never_invalidates_parameters() {
        // The panel floor is above the generator's minimum, so committed
        // values always validate.
        let mut panel = TweakPanel::default();
        panel.pending.count = COUNT_RANGE.min as u32;
        panel.selected = 0;
        for _ in 0..5 {
            panel.adjust(-1.0);
        }
        assert!(panel.pending.validate().is_ok());
    }
}
