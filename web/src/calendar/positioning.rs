/// Height assumed for a calendar popover when deciding where it fits.
pub const CALENDAR_POPOVER_HEIGHT: f64 = 360.0;

/// Height assumed for list popovers (city dropdown, guest stepper).
pub const LIST_POPOVER_HEIGHT: f64 = 280.0;

/// Where a popover is allowed to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    #[default]
    Auto,
    /// Bottom sheets and inline forms never flip upward.
    AlwaysBelow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Below,
    Above,
}

impl Placement {
    pub fn is_above(self) -> bool {
        self == Placement::Above
    }
}

/// Vertical extent of a trigger element in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRect {
    pub top: f64,
    pub bottom: f64,
}

/// Opens upward only when the popover does not fit below and there is more
/// room above. A trigger that is not mounted yet opens below.
pub fn decide_placement(
    trigger: Option<TriggerRect>,
    viewport_height: f64,
    popover_height: f64,
) -> Placement {
    let Some(rect) = trigger else {
        return Placement::Below;
    };
    let space_below = viewport_height - rect.bottom;
    let space_above = rect.top;
    if space_below < popover_height && space_above > space_below {
        Placement::Above
    } else {
        Placement::Below
    }
}

impl PlacementPolicy {
    /// An unknown viewport height is treated like an unmounted trigger.
    pub fn place(
        self,
        trigger: Option<TriggerRect>,
        viewport_height: Option<f64>,
        popover_height: f64,
    ) -> Placement {
        match (self, viewport_height) {
            (PlacementPolicy::Auto, Some(viewport)) if viewport > 0.0 => {
                decide_placement(trigger, viewport, popover_height)
            }
            _ => Placement::Below,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_with_space(above: f64, below: f64, viewport: f64) -> TriggerRect {
        TriggerRect {
            top: above,
            bottom: viewport - below,
        }
    }

    #[test]
    fn test_opens_upward_when_cramped_below() {
        let rect = rect_with_space(500.0, 100.0, 640.0);
        assert_eq!(decide_placement(Some(rect), 640.0, 300.0), Placement::Above);
    }

    #[test]
    fn test_opens_downward_when_it_fits() {
        for above in [0.0, 200.0, 900.0] {
            let rect = rect_with_space(above, 400.0, above + 440.0);
            assert_eq!(
                decide_placement(Some(rect), above + 440.0, 300.0),
                Placement::Below
            );
        }
    }

    #[test]
    fn test_stays_below_when_above_is_no_better() {
        let rect = rect_with_space(80.0, 100.0, 220.0);
        assert_eq!(decide_placement(Some(rect), 220.0, 300.0), Placement::Below);
    }

    #[test]
    fn test_unmounted_trigger_opens_below() {
        assert_eq!(decide_placement(None, 800.0, 300.0), Placement::Below);
    }

    #[test]
    fn test_always_below_policy() {
        let rect = rect_with_space(500.0, 100.0, 640.0);
        assert_eq!(
            PlacementPolicy::AlwaysBelow.place(Some(rect), Some(640.0), 300.0),
            Placement::Below
        );
        assert_eq!(
            PlacementPolicy::Auto.place(Some(rect), Some(640.0), 300.0),
            Placement::Above
        );
    }

    #[test]
    fn test_unknown_viewport_opens_below() {
        let rect = rect_with_space(500.0, 100.0, 640.0);
        assert_eq!(PlacementPolicy::Auto.place(Some(rect), None, 300.0), Placement::Below);
        assert_eq!(
            PlacementPolicy::Auto.place(Some(rect), Some(0.0), 300.0),
            Placement::Below
        );
    }
}
